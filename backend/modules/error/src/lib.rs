use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use dto::moves::ErrorResponse;
use engine::EngineError;
use thiserror::Error;

/// Everything a move request can fail with, as seen by an HTTP caller.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing FEN or Level")]
    MissingInput,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("AI Engine Failed to Start")]
    EngineStartup(#[source] EngineError),
    #[error("AI Engine Failed: {0}")]
    Engine(#[source] EngineError),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Launch(_) => Self::EngineStartup(err),
            other => Self::Engine(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingInput | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::EngineStartup(_) | Self::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("Engine Error: {:?}", self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
