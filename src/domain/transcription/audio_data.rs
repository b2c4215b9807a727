//! Audio data value object

use std::fmt;

/// File extensions accepted by upload validation
pub const ACCEPTED_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "ogg", "flac", "webm", "aac"];

/// Known audio MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioMimeType {
    Mp3,
    Mpeg,
    Wav,
    M4a,
    Ogg,
    Flac,
    Webm,
    Aac,
}

impl AudioMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mp3",
            Self::Mpeg => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::M4a => "audio/mp4",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
            Self::Webm => "audio/webm",
            Self::Aac => "audio/aac",
        }
    }

    /// Map an accepted file extension to its MIME type
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            "m4a" => Some(Self::M4a),
            "ogg" => Some(Self::Ogg),
            "flac" => Some(Self::Flac),
            "webm" => Some(Self::Webm),
            "aac" => Some(Self::Aac),
            _ => None,
        }
    }

    /// Map a filename to a MIME type via its extension
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        Self::from_extension(ext)
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for AudioMimeType {
    fn default() -> Self {
        Self::Mpeg
    }
}

/// Pick the content type sent to the transcription service: the declared
/// type wins, then the extension, then the `audio/mpeg` fallback.
pub fn resolve_mime_type(declared: Option<&str>, file_name: &str) -> String {
    declared
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .or_else(|| AudioMimeType::from_file_name(file_name).map(|m| m.as_str().to_string()))
        .unwrap_or_else(|| AudioMimeType::default().as_str().to_string())
}

/// Value object representing audio ready for the transcription service.
/// Contains raw audio bytes and the content type they will be sent as.
#[derive(Debug, Clone)]
pub struct AudioData {
    data: Vec<u8>,
    mime_type: String,
}

impl AudioData {
    /// Create AudioData from raw bytes
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the content type
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Encode the audio data as base64
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_as_str() {
        assert_eq!(AudioMimeType::Mp3.as_str(), "audio/mp3");
        assert_eq!(AudioMimeType::Wav.as_str(), "audio/wav");
        assert_eq!(AudioMimeType::M4a.as_str(), "audio/mp4");
    }

    #[test]
    fn from_extension_is_case_insensitive() {
        assert_eq!(AudioMimeType::from_extension("MP3"), Some(AudioMimeType::Mp3));
        assert_eq!(AudioMimeType::from_extension("Flac"), Some(AudioMimeType::Flac));
        assert_eq!(AudioMimeType::from_extension("txt"), None);
    }

    #[test]
    fn from_file_name_uses_last_extension() {
        assert_eq!(
            AudioMimeType::from_file_name("macro_05.wav"),
            Some(AudioMimeType::Wav)
        );
        assert_eq!(
            AudioMimeType::from_file_name("lecture.backup.mp3"),
            Some(AudioMimeType::Mp3)
        );
        assert_eq!(AudioMimeType::from_file_name("no-extension"), None);
    }

    #[test]
    fn resolve_prefers_declared_type() {
        let mime = resolve_mime_type(Some("audio/x-custom"), "file.mp3");
        assert_eq!(mime, "audio/x-custom");
    }

    #[test]
    fn resolve_falls_back_to_extension() {
        assert_eq!(resolve_mime_type(None, "file.wav"), "audio/wav");
        assert_eq!(resolve_mime_type(Some(""), "file.ogg"), "audio/ogg");
    }

    #[test]
    fn resolve_defaults_to_mpeg() {
        assert_eq!(resolve_mime_type(None, "mystery.bin"), "audio/mpeg");
    }

    #[test]
    fn audio_data_size() {
        let data = AudioData::new(vec![0u8; 1024], "audio/mpeg");
        assert_eq!(data.size_bytes(), 1024);
    }

    #[test]
    fn to_base64() {
        let data = AudioData::new(vec![1, 2, 3, 4], "audio/mpeg");
        let b64 = data.to_base64();
        assert!(!b64.is_empty());
        // Verify it's valid base64 by decoding
        use base64::Engine;
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&b64)
            .unwrap();
        assert_eq!(decoded, vec![1, 2, 3, 4]);
    }

    #[test]
    fn accepted_extensions_map_to_mime_types() {
        for ext in ACCEPTED_EXTENSIONS {
            assert!(AudioMimeType::from_extension(ext).is_some(), "{}", ext);
        }
    }
}
