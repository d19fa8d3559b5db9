use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Image not provided")]
    MissingImage,

    #[error("Image payload could not be decoded")]
    InvalidImage,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Analysis timed out")]
    Timeout,

    #[error("Analysis failed")]
    AnalysisFailed,
}

impl CoreError {
    /// Whether the caller sent something unusable, as opposed to the pipeline failing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::MissingImage)
    }
}
