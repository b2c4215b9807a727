//! Lecture analysis value object

use serde::{Deserialize, Serialize};

/// Structured result returned by the transcription service: the full
/// transcript plus a markdown-flavored summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureAnalysis {
    pub transcript: String,
    pub summary: String,
}

impl LectureAnalysis {
    /// True when the service produced no usable content
    pub fn is_empty(&self) -> bool {
        self.transcript.trim().is_empty() && self.summary.trim().is_empty()
    }
}
