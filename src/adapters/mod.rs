// Adapters layer: concrete implementations for external systems
// (selection storage, platform URL opener). The HTTP client lives in
// core::client next to the query pipeline it serves.

pub mod opener;
pub mod storage;

pub use opener::SystemUrlOpener;
pub use storage::FileSelectionStore;
