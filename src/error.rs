//! Request-time errors for the classification service

use actix_multipart::MultipartError;
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Body could not be parsed as multipart form data
    #[error("Malformed multipart body: {0}")]
    Multipart(String),

    /// Text field was not valid UTF-8
    #[error("Field `{0}` is not valid UTF-8")]
    InvalidText(String),

    /// Field exceeded its configured size limit
    #[error("Field `{field}` exceeds the {limit} byte limit")]
    TooLarge { field: String, limit: usize },

    /// Temporary upload storage failed
    #[error("Upload storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Blocking thread pool was shut down or the task panicked
    #[error("Blocking task failed")]
    Blocking,
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::Multipart(err.to_string())
    }
}

impl From<BlockingError> for AppError {
    fn from(_: BlockingError) -> Self {
        AppError::Blocking
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Multipart(_) | AppError::InvalidText(_) => StatusCode::BAD_REQUEST,
            AppError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage(_) | AppError::Blocking => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
