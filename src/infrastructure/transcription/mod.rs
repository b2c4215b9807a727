//! Transcription service adapters

mod gemini;

pub use gemini::GeminiProcessor;
