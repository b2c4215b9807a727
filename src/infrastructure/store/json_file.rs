//! JSON-file lecture store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{LectureStore, StoreError};
use crate::domain::lecture::Lecture;

/// Lecture library stored as a single JSON array on disk
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store at the default data path
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lecture-scribe");

        Self {
            path: data_dir.join("lectures.json"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the library file path
    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LectureStore for JsonFileStore {
    async fn load(&self) -> Result<Option<Vec<Lecture>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::ReadError(e.to_string()))?;

        let lectures: Vec<Lecture> =
            serde_json::from_str(&content).map_err(|e| StoreError::ParseError(e.to_string()))?;

        Ok(Some(lectures))
    }

    async fn save(&self, lectures: &[Lecture]) -> Result<(), StoreError> {
        // An empty library never overwrites stored history
        if lectures.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::WriteError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(lectures)
            .map_err(|e| StoreError::WriteError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| StoreError::WriteError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_under_data_dir() {
        let store = JsonFileStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("lecture-scribe"));
        assert!(path.to_string_lossy().ends_with("lectures.json"));
    }

    #[test]
    fn custom_path() {
        let store = JsonFileStore::with_path("/custom/path/lectures.json");
        assert_eq!(store.path(), PathBuf::from("/custom/path/lectures.json"));
    }
}
