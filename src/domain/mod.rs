//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod lecture;
pub mod transcription;
pub mod view;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use lecture::{Lecture, LectureId};
pub use transcription::{AnalysisPrompt, AudioData, AudioMimeType, LectureAnalysis};
pub use view::ViewState;
