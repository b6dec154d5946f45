use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type.
///
/// The `Display` text of every variant is what the user sees; technical
/// detail carried by a variant is only logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Please enter text or upload a file!")]
    NoInput,

    #[error("Translation failed. Please try again.")]
    Translation(String),

    #[error("TTS generation failed!")]
    Synthesis(String),

    #[error("Unknown action requested.")]
    InvalidMode(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response structure - simplified to just message + status code
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Severity of a message flashed back onto the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Warning,
    Danger,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Warning => "warning",
            FlashLevel::Danger => "danger",
        }
    }
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoInput | Self::InvalidMode(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Translation(_) => StatusCode::BAD_GATEWAY,
            Self::Synthesis(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// How the message is presented when redirected back to the form
    pub fn flash_level(&self) -> FlashLevel {
        match self {
            Self::NoInput
            | Self::Translation(_)
            | Self::InvalidMode(_)
            | Self::BadRequest(_)
            | Self::PayloadTooLarge(_) => FlashLevel::Warning,
            Self::Synthesis(_) | Self::Internal(_) => FlashLevel::Danger,
        }
    }

    /// Technical detail for logs
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Translation(detail)
            | Self::Synthesis(detail)
            | Self::InvalidMode(detail)
            | Self::Internal(detail) => Some(detail),
            Self::NoInput | Self::BadRequest(_) | Self::PayloadTooLarge(_) => None,
        }
    }

    /// Convert to simplified error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
        }
    }

    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                detail = self.detail().unwrap_or_default(),
                status = %status.as_u16(),
                "Request failed"
            );
        } else {
            tracing::warn!(
                error = %self,
                detail = self.detail().unwrap_or_default(),
                status = %status.as_u16(),
                "Request rejected"
            );
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), Json(self.to_response())).into_response()
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::BadRequest(format!("Malformed form submission: {}", err.body_text()))
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::Internal(format!("Failed to render page: {}", err))
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
