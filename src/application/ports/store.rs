//! Lecture store port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::lecture::Lecture;

/// Lecture store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Failed to read lecture library: {0}")]
    ReadError(String),

    #[error("Failed to write lecture library: {0}")]
    WriteError(String),

    #[error("Stored lecture library is malformed: {0}")]
    ParseError(String),
}

/// Port for persisting the lecture library
#[async_trait]
pub trait LectureStore: Send + Sync {
    /// Load the persisted library.
    ///
    /// # Returns
    /// `Ok(None)` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<Vec<Lecture>>, StoreError>;

    /// Persist the whole library, newest first.
    ///
    /// Implementations must treat an empty list as a no-op so that stored
    /// history can never be erased by an empty in-memory state.
    async fn save(&self, lectures: &[Lecture]) -> Result<(), StoreError>;
}
