// Domain layer: core models and ports (interfaces). No external I/O here.

pub mod model;
pub mod ports;

pub use model::{Cuisine, QueryDescriptor, QueryShape, Recipe, CUISINE_CATALOG};
pub use ports::{RecipeService, SelectionStore, ServiceConfig, UrlOpener};
