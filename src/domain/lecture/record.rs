//! Lecture record entity

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::transcription::LectureAnalysis;

/// Processed-at label assigned to a freshly committed lecture
pub const PROCESSED_JUST_UPLOADED: &str = "Just uploaded";

/// Duration label used while no estimate exists.
/// Duration is display-only and never computed from the audio.
pub const DURATION_PENDING: &str = "Estimating...";

/// Unique identifier for a lecture record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LectureId(String);

impl LectureId {
    /// Generate a fresh unique identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LectureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LectureId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LectureId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A persisted unit representing one processed audio upload and its
/// derived transcript and summary. Records are immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: LectureId,
    pub title: String,
    /// Human-readable label, display-only
    pub processed_at: String,
    /// Human-readable label, display-only
    pub duration: String,
    pub file_name: String,
    pub file_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    /// Markdown-flavored summary text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Lecture {
    /// Construct a record for a successfully processed upload
    pub fn from_upload(file_name: &str, file_size: u64, analysis: LectureAnalysis) -> Self {
        Self {
            id: LectureId::generate(),
            title: derive_title(file_name),
            processed_at: PROCESSED_JUST_UPLOADED.to_string(),
            duration: DURATION_PENDING.to_string(),
            file_name: file_name.to_string(),
            file_size,
            transcript: Some(analysis.transcript),
            summary: Some(analysis.summary),
            created_at: Utc::now(),
        }
    }

    /// Get human-readable file size
    pub fn human_readable_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Derive a display title from a filename: the extension is stripped and
/// `-`/`_` become spaces.
pub fn derive_title(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);

    stem.chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect()
}

fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis() -> LectureAnalysis {
        LectureAnalysis {
            transcript: "Welcome to class.".to_string(),
            summary: "### Key points\n- One".to_string(),
        }
    }

    #[test]
    fn derive_title_replaces_underscores() {
        assert_eq!(derive_title("macro_05.wav"), "macro 05");
    }

    #[test]
    fn derive_title_replaces_hyphens() {
        assert_eq!(derive_title("psico-clase-03.mp3"), "psico clase 03");
    }

    #[test]
    fn derive_title_strips_last_extension_only() {
        assert_eq!(derive_title("lecture.backup.mp3"), "lecture.backup");
    }

    #[test]
    fn derive_title_without_extension() {
        assert_eq!(derive_title("plain_name"), "plain name");
    }

    #[test]
    fn from_upload_sets_sentinel_labels() {
        let lecture = Lecture::from_upload("macro_05.wav", 1024, analysis());
        assert_eq!(lecture.title, "macro 05");
        assert_eq!(lecture.processed_at, PROCESSED_JUST_UPLOADED);
        assert_eq!(lecture.duration, DURATION_PENDING);
        assert_eq!(lecture.file_name, "macro_05.wav");
        assert_eq!(lecture.file_size, 1024);
        assert_eq!(lecture.transcript.as_deref(), Some("Welcome to class."));
    }

    #[test]
    fn from_upload_assigns_unique_ids() {
        let a = Lecture::from_upload("a.mp3", 1, analysis());
        let b = Lecture::from_upload("a.mp3", 1, analysis());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn lecture_id_display_round_trip() {
        let id = LectureId::from("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn human_readable_size() {
        let mut lecture = Lecture::from_upload("a.mp3", 500, analysis());
        assert_eq!(lecture.human_readable_size(), "500 B");
        lecture.file_size = 2048;
        assert_eq!(lecture.human_readable_size(), "2.0 KB");
        lecture.file_size = 45_000_000;
        assert_eq!(lecture.human_readable_size(), "42.9 MB");
    }

    #[test]
    fn serde_round_trip() {
        let lecture = Lecture::from_upload("macro_05.wav", 1024, analysis());
        let json = serde_json::to_string(&lecture).unwrap();
        let parsed: Lecture = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lecture);
    }
}
