use crate::domain::model::Cuisine;
use crate::domain::ports::SelectionStore;
use crate::utils::error::{RecipeError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// On-disk document. The key name is the storage contract and must not
/// change across releases.
#[derive(Debug, Serialize, Deserialize)]
struct SelectionRecord {
    #[serde(rename = "selectedCuisine")]
    selected_cuisine: String,
    updated_at: DateTime<Utc>,
}

/// File-backed store for the single persisted cuisine selection.
#[derive(Debug, Clone)]
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SelectionStore for FileSelectionStore {
    async fn get(&self) -> Result<Option<Cuisine>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RecipeError::StorageRead {
                    message: format!("{}: {}", self.path.display(), e),
                })
            }
        };

        let record: SelectionRecord =
            serde_json::from_str(&content).map_err(|e| RecipeError::StorageRead {
                message: format!("{}: {}", self.path.display(), e),
            })?;

        Ok(Some(Cuisine::new(record.selected_cuisine)))
    }

    async fn set(&self, cuisine: &Cuisine) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| RecipeError::StorageWrite {
                message: format!("{}: {}", parent.display(), e),
            })?;
        }

        let record = SelectionRecord {
            selected_cuisine: cuisine.as_str().to_string(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, json).map_err(|e| RecipeError::StorageWrite {
            message: format!("{}: {}", self.path.display(), e),
        })?;

        Ok(())
    }
}
