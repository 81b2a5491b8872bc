#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::query::DEFAULT_PAGE_SIZE;
use crate::domain::model::QueryShape;
use crate::domain::ports::ServiceConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "https://api.edamam.com/api/recipes/v2";
pub const DEFAULT_SELECTION_PATH: &str = "./.recipe-finder/selection.json";

/// 合併後的最終配置：CLI 參數優先於 TOML 檔案，再補上預設值
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub app_id: String,
    pub app_key: String,
    pub page_size: usize,
    pub shape: QueryShape,
    pub selection_path: PathBuf,
    pub catalog_override: Option<Vec<String>>,
}

impl ResolvedConfig {
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        let service = file.as_ref().map(|f| &f.service);
        let storage = file.as_ref().and_then(|f| f.storage.as_ref());
        let catalog = file.as_ref().and_then(|f| f.catalog.as_ref());

        let shape = if cli.keyword_search {
            QueryShape::Keyword
        } else {
            service.and_then(|s| s.shape).unwrap_or_default()
        };

        Ok(Self {
            endpoint: cli
                .endpoint
                .clone()
                .or_else(|| service.map(|s| s.endpoint.clone()))
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            app_id: cli
                .app_id
                .clone()
                .or_else(|| service.map(|s| s.app_id.clone()))
                .unwrap_or_default(),
            app_key: cli
                .app_key
                .clone()
                .or_else(|| service.map(|s| s.app_key.clone()))
                .unwrap_or_default(),
            page_size: cli
                .page_size
                .or_else(|| service.and_then(|s| s.page_size))
                .unwrap_or(DEFAULT_PAGE_SIZE),
            shape,
            selection_path: cli
                .selection_path
                .clone()
                .or_else(|| {
                    storage.and_then(|s| s.selection_path.clone().map(PathBuf::from))
                })
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SELECTION_PATH)),
            catalog_override: catalog.map(|c| c.cuisines.clone()),
        })
    }
}

impl ServiceConfig for ResolvedConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn app_id(&self) -> &str {
        &self.app_id
    }

    fn app_key(&self) -> &str {
        &self.app_key
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn query_shape(&self) -> QueryShape {
        self.shape
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_not_empty("app_id", &self.app_id)?;
        validation::validate_not_empty("app_key", &self.app_key)?;
        validation::validate_positive_number("page_size", self.page_size, 1)?;
        Ok(())
    }
}
