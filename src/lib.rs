pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{ResolvedConfig, TomlConfig};

pub use adapters::{FileSelectionStore, SystemUrlOpener};
pub use crate::core::{
    Navigator, RecipeClient, ResultsState, ResultsViewModel, Screen, SelectorViewModel,
};
pub use domain::{Cuisine, QueryDescriptor, QueryShape, Recipe, CUISINE_CATALOG};
pub use utils::error::{RecipeError, Result};
