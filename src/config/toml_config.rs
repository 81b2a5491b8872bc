use crate::domain::model::QueryShape;
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceSection,
    pub storage: Option<StorageSection>,
    pub catalog: Option<CatalogSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub endpoint: String,
    pub app_id: String,
    pub app_key: String,
    pub page_size: Option<usize>,
    pub shape: Option<QueryShape>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    pub selection_path: Option<String>,
}

/// 部署變體的料理目錄覆寫（如 21 項清單）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub cuisines: Vec<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecipeError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 先處理環境變數替換，憑證才不用寫死在檔案裡
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecipeError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EDAMAM_APP_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("service.endpoint", &self.service.endpoint)?;
        crate::utils::validation::validate_not_empty("service.app_id", &self.service.app_id)?;
        crate::utils::validation::validate_not_empty("service.app_key", &self.service.app_key)?;

        if let Some(page_size) = self.service.page_size {
            crate::utils::validation::validate_positive_number("service.page_size", page_size, 1)?;
        }

        if let Some(catalog) = &self.catalog {
            if catalog.cuisines.is_empty() {
                return Err(RecipeError::InvalidConfigValue {
                    field: "catalog.cuisines".to_string(),
                    value: "[]".to_string(),
                    reason: "Catalog override cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
