//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod processor;
pub mod store;

// Re-export common types
pub use config::ConfigStore;
pub use processor::{LectureProcessor, ProcessingError, ProcessingRequest};
pub use store::{LectureStore, StoreError};
