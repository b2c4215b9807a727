//! Transcription service port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::LectureAnalysis;

/// Processing errors surfaced by the transcription service boundary
#[derive(Debug, Clone, Error)]
pub enum ProcessingError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("The service returned an empty result")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Request sent across the transcription service boundary
#[derive(Debug, Clone)]
pub struct ProcessingRequest {
    pub file_name: String,
    pub audio_base64: String,
    pub mime_type: String,
}

/// Port for lecture transcription and summarization.
///
/// One outstanding call per invocation; no retries, no batching. The
/// caller decides whether the user may retry manually.
#[async_trait]
pub trait LectureProcessor: Send + Sync {
    /// Process an encoded lecture recording.
    ///
    /// # Arguments
    /// * `request` - Filename, base64 audio payload, and content type
    ///
    /// # Returns
    /// The transcript and summary, or a `ProcessingError`
    async fn process(&self, request: &ProcessingRequest)
        -> Result<LectureAnalysis, ProcessingError>;
}
