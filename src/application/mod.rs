//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations, the session (view state)
//! controller, and trait definitions for external system interactions.

pub mod ports;
pub mod session;
pub mod upload;

// Re-export use cases
pub use session::{SelectionError, Session};
pub use upload::{
    UploadCallbacks, UploadError, UploadLectureUseCase, UploadOutput, UploadSource, UploadStage,
};
