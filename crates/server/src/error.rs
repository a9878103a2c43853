//! HTTP error mapping
//!
//! Every failure leaves the service as `{"detail": "<message>"}` with a
//! status code chosen by the error kind.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use soulchat_adapters::BirthInputError;
use tracing::warn;

use crate::dtos::ErrorResponse;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] BirthInputError),

    #[error("{0}")]
    UnprocessableBody(String),
}

impl ApiError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::UnprocessableBody(_) => "unprocessable_body",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::UnprocessableBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_type = self.error_type();

        match &self {
            ApiError::Validation(e) => {
                warn!(error_type, field = e.field(), details = %e, "Invalid birth input");
            }
            ApiError::UnprocessableBody(msg) => {
                warn!(error_type, details = %msg, "Malformed request body");
            }
        }

        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
