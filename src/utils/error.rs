use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe service request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Recipe service returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed recipe response: {message}")]
    MalformedResponse { message: String },

    #[error("Selection read failed: {message}")]
    StorageRead { message: String },

    #[error("Selection write failed: {message}")]
    StorageWrite { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl RecipeError {
    /// 給終端使用者看的訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            RecipeError::Network(_) => "Could not reach the recipe service".to_string(),
            RecipeError::HttpStatus { status } => {
                format!("The recipe service rejected the request (HTTP {})", status)
            }
            RecipeError::MalformedResponse { .. } => {
                "The recipe service sent an unexpected response".to_string()
            }
            RecipeError::StorageRead { .. } | RecipeError::StorageWrite { .. } => {
                "Could not access the saved cuisine selection".to_string()
            }
            RecipeError::Io(e) => format!("File operation failed: {}", e),
            RecipeError::Serialization(_) => "Could not decode stored data".to_string(),
            RecipeError::Config { message } => format!("Configuration problem: {}", message),
            RecipeError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
        }
    }

    /// 建議的排除方式
    pub fn recovery_suggestion(&self) -> String {
        match self {
            RecipeError::Network(_) => {
                "Check your network connection and try again".to_string()
            }
            RecipeError::HttpStatus { status } if *status == 401 || *status == 403 => {
                "Verify EDAMAM_APP_ID / EDAMAM_APP_KEY are set correctly".to_string()
            }
            RecipeError::HttpStatus { .. } | RecipeError::MalformedResponse { .. } => {
                "Try again later; the service may be having issues".to_string()
            }
            RecipeError::StorageRead { .. } | RecipeError::StorageWrite { .. } => {
                "Check that the selection path is writable".to_string()
            }
            RecipeError::Io(_) | RecipeError::Serialization(_) => {
                "Check file permissions and disk space".to_string()
            }
            RecipeError::Config { .. } | RecipeError::InvalidConfigValue { .. } => {
                "Fix the configuration value and rerun".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
