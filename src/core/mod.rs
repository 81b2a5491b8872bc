pub mod client;
pub mod navigation;
pub mod query;
pub mod results;
pub mod selector;

pub use crate::domain::model::{Cuisine, QueryDescriptor, QueryShape, Recipe};
pub use crate::domain::ports::{RecipeService, SelectionStore, ServiceConfig, UrlOpener};
pub use crate::utils::error::Result;
pub use client::RecipeClient;
pub use navigation::{Navigator, Screen};
pub use results::{ResultsState, ResultsViewModel};
pub use selector::SelectorViewModel;
