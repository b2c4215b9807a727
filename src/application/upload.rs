//! Upload lecture use case
//!
//! Drives the validate -> encode -> transcribe -> commit workflow that
//! turns a raw file into a committed lecture record.

use thiserror::Error;

use crate::domain::error::ValidationError;
use crate::domain::lecture::Lecture;
use crate::domain::transcription::{resolve_mime_type, AudioData, AudioMimeType};

use super::ports::{LectureProcessor, LectureStore, ProcessingError, ProcessingRequest};
use super::session::Session;

/// Advisory upload size; larger files are accepted with a warning
pub const ADVISORY_SIZE_LIMIT: u64 = 200 * 1024 * 1024;

/// Errors from the upload use case
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Another upload is already in progress")]
    Busy,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Processing failed: {0}")]
    Processing(#[from] ProcessingError),
}

/// Workflow stages, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Validating,
    Encoding,
    Transcribing,
}

/// Input for one upload: the raw file contents plus what the caller
/// knows about them
#[derive(Debug, Clone)]
pub struct UploadSource {
    pub file_name: String,
    /// Declared content type, when the caller knows one
    pub declared_mime: Option<String>,
    pub bytes: Vec<u8>,
}

/// Callbacks for stage updates
#[derive(Default)]
pub struct UploadCallbacks {
    pub on_stage: Option<Box<dyn Fn(UploadStage) + Send + Sync>>,
}

impl UploadCallbacks {
    fn stage(&self, stage: UploadStage) {
        if let Some(ref cb) = self.on_stage {
            cb(stage);
        }
    }
}

/// Output from the upload use case
#[derive(Debug, Clone)]
pub struct UploadOutput {
    /// The committed lecture record
    pub lecture: Lecture,
    /// Whether the library write succeeded. Persistence is
    /// fire-and-forget; a failed write does not fail the upload.
    pub persisted: bool,
}

/// Upload workflow use case
pub struct UploadLectureUseCase<P: LectureProcessor> {
    processor: P,
}

impl<P: LectureProcessor> UploadLectureUseCase<P> {
    /// Create a new use case instance
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    /// Execute the upload workflow against a session.
    ///
    /// On success the new lecture is prepended, selected, and persisted.
    /// On any failure the session's error slot is set, the view reverts
    /// to HOME, and the library is left untouched.
    pub async fn execute<S: LectureStore>(
        &self,
        session: &mut Session<S>,
        source: UploadSource,
        callbacks: UploadCallbacks,
    ) -> Result<UploadOutput, UploadError> {
        if !session.begin_upload() {
            return Err(UploadError::Busy);
        }

        let UploadSource {
            file_name,
            declared_mime,
            bytes,
        } = source;

        callbacks.stage(UploadStage::Validating);
        if let Err(e) = validate(&file_name, declared_mime.as_deref()) {
            session.fail(e.to_string());
            return Err(e.into());
        }

        // Encoding fully completes before the transcription call begins
        callbacks.stage(UploadStage::Encoding);
        let file_size = bytes.len() as u64;
        let mime_type = resolve_mime_type(declared_mime.as_deref(), &file_name);
        let audio = AudioData::new(bytes, mime_type);
        let request = ProcessingRequest {
            file_name: file_name.clone(),
            audio_base64: audio.to_base64(),
            mime_type: audio.mime_type().to_string(),
        };

        callbacks.stage(UploadStage::Transcribing);
        let analysis = match self.processor.process(&request).await {
            Ok(analysis) => analysis,
            Err(e) => {
                session.fail(e.to_string());
                return Err(e.into());
            }
        };

        let lecture = Lecture::from_upload(&file_name, file_size, analysis);
        let persisted = session.commit(lecture.clone()).await.is_ok();

        Ok(UploadOutput { lecture, persisted })
    }
}

/// A file is accepted when its declared type is an audio type or its
/// name carries an accepted audio extension.
fn validate(file_name: &str, declared_mime: Option<&str>) -> Result<(), ValidationError> {
    let mime_ok = declared_mime.is_some_and(|m| m.starts_with("audio/"));
    let extension_ok = AudioMimeType::from_file_name(file_name).is_some();

    if mime_ok || extension_ok {
        Ok(())
    } else {
        Err(ValidationError {
            file_name: file_name.to_string(),
        })
    }
}
