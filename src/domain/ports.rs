use crate::domain::model::{Cuisine, QueryDescriptor, QueryShape, Recipe};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable single-key store for the last selected cuisine.
///
/// `get` distinguishes "never set" (`Ok(None)`) from a failed read
/// (`Err(StorageRead)`); callers decide the policy. `set` overwrites,
/// no versioning.
#[async_trait]
pub trait SelectionStore: Send + Sync {
    async fn get(&self) -> Result<Option<Cuisine>>;
    async fn set(&self, cuisine: &Cuisine) -> Result<()>;
}

/// Remote recipe search service. One request per call, no retry.
#[async_trait]
pub trait RecipeService: Send + Sync {
    async fn search(&self, descriptor: &QueryDescriptor) -> Result<Vec<Recipe>>;
}

/// Static service configuration. Credentials are supplied here, never
/// embedded in query construction.
pub trait ServiceConfig: Send + Sync {
    fn endpoint(&self) -> &str;
    fn app_id(&self) -> &str;
    fn app_key(&self) -> &str;
    fn page_size(&self) -> usize;
    fn query_shape(&self) -> QueryShape;
}

/// Hands a recipe's external URL to the platform's default handler.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}
