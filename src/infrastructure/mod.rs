//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Gemini API and the
//! on-disk lecture library.

pub mod config;
pub mod store;
pub mod transcription;

// Re-export adapters
pub use config::XdgConfigStore;
pub use store::JsonFileStore;
pub use transcription::GeminiProcessor;
