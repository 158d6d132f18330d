use actix_web::{http::StatusCode, HttpResponse};
use derive_more::Display;
use serde_json::json;

use crate::models::note::ValidationError;

#[derive(Debug, Display)]
pub enum ServerError {
    #[display(fmt = "invalid id")]
    InvalidId,
    #[display(fmt = "{}", _0)]
    UserError(ValidationError),
    #[display(fmt = "invalid request body")]
    InvalidBody,
    #[display(fmt = "request body too large")]
    PayloadTooLarge,
    #[display(fmt = "content type must be application/json")]
    UnsupportedMediaType,
    #[display(fmt = "Note not found.")]
    NotFound,
    /// Carries only the message shown to the client; details are logged.
    #[display(fmt = "{}", _0)]
    Internal(&'static str),
}

impl From<ValidationError> for ServerError {
    fn from(e: ValidationError) -> ServerError {
        ServerError::UserError(e)
    }
}

impl actix_web::error::ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidId | ServerError::UserError(_) | ServerError::InvalidBody => {
                StatusCode::BAD_REQUEST
            }
            ServerError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
