//! Transcription domain module

mod analysis;
mod audio_data;
mod prompt;

pub use analysis::LectureAnalysis;
pub use audio_data::{resolve_mime_type, AudioData, AudioMimeType, ACCEPTED_EXTENSIONS};
pub use prompt::AnalysisPrompt;
