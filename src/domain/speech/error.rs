use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("no usable text after acquisition")]
    NoInput,
    #[error("translation failed: {0}")]
    Translation(String),
    #[error("synthesis failed: {0}")]
    Synthesis(String),
    #[error("unrecognized output mode: {0}")]
    InvalidMode(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::NoInput => AppError::NoInput,
            SpeechServiceError::Translation(msg) => AppError::Translation(msg),
            SpeechServiceError::Synthesis(msg) => AppError::Synthesis(msg),
            SpeechServiceError::InvalidMode(mode) => AppError::InvalidMode(mode),
            SpeechServiceError::Internal(msg) => AppError::Internal(msg),
        }
    }
}
