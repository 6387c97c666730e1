use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use common::types::MessageBody;
use models::errors::ModelError;
use service::access::AccessError;
use service::auth::errors::AuthError;
use service::errors::ServiceError;

/// Error returned by every handler; renders as `{"message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} does not exist", entity)) }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // 401 carries no body
            ApiError::Unauthorized => status.into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (status, Json(MessageBody::new("internal server error"))).into_response()
            }
            ApiError::BadRequest(msg) | ApiError::Forbidden(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => {
                (status, Json(MessageBody::new(msg))).into_response()
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => ApiError::BadRequest(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Db(msg) | ServiceError::Internal(msg) | ServiceError::Model(ModelError::Db(msg)) => ApiError::Internal(msg),
        }
    }
}

impl From<AccessError> for ApiError {
    fn from(e: AccessError) -> Self {
        match e {
            AccessError::Unauthenticated => ApiError::Unauthorized,
            AccessError::Deactivated | AccessError::NotAdmin => ApiError::Forbidden(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(msg) => ApiError::BadRequest(msg),
            AuthError::Conflict => ApiError::Conflict(e.to_string()),
            AuthError::Unauthorized | AuthError::NotFound => ApiError::Unauthorized,
            AuthError::HashError(_) | AuthError::TokenError(_) | AuthError::Repository(_) => {
                ApiError::Internal(format!("auth error {}: {}", e.code(), e))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("bootstrap failed: {0}")]
    Bootstrap(#[from] ServiceError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
