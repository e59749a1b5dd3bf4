use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::ServiceError;
use log::error;

use crate::types::ErrorResponse;

/// Every failure a request can end in, before or after reaching a handler.
#[derive(Debug)]
pub enum ApiError {
    InvalidPath(String),
    InvalidBody(String),
    UnsupportedMediaType(String),
    PayloadTooLarge(String),
    Unauthenticated(String),
    Service(ServiceError),
}

impl ApiError {
    /// The error kind to status table.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Service(ServiceError::Unauthorized) => StatusCode::UNAUTHORIZED,
            ApiError::Service(ServiceError::Forbidden(_)) => StatusCode::FORBIDDEN,
            ApiError::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::BadRequest(_)) => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::InternalError(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidPath(_) => "invalid_path",
            ApiError::InvalidBody(_) => "invalid_body",
            ApiError::UnsupportedMediaType(_) => "unsupported_media_type",
            ApiError::PayloadTooLarge(_) => "payload_too_large",
            ApiError::Unauthenticated(_) => "unauthenticated",
            ApiError::Service(ServiceError::Unauthorized) => "unauthenticated",
            ApiError::Service(ServiceError::Forbidden(_)) => "forbidden",
            ApiError::Service(ServiceError::NotFound(_)) => "not_found",
            ApiError::Service(ServiceError::BadRequest(_)) => "bad_request",
            ApiError::Service(ServiceError::InternalError(_)) => "internal_error",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidPath(msg) => write!(f, "Invalid path: {}", msg),
            ApiError::InvalidBody(msg) => write!(f, "Invalid body: {}", msg),
            ApiError::UnsupportedMediaType(msg) => write!(f, "Unsupported media type: {}", msg),
            ApiError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            ApiError::Unauthenticated(msg) => write!(f, "Unauthenticated: {}", msg),
            ApiError::Service(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(r) => ApiError::UnsupportedMediaType(r.body_text()),
            // the body limit surfaces as a buffering failure
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                ApiError::PayloadTooLarge(other.body_text())
            }
            other => ApiError::InvalidBody(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("request failed: {}", self);
        }

        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
