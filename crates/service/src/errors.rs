use thiserror::Error;

use crate::auth::errors::AuthError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("internal error: {0}")]
    Internal(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} does not exist", entity)) }

    /// Validation failures coming from either layer.
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_) | ServiceError::Model(models::errors::ModelError::Validation(_)))
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

impl From<AuthError> for ServiceError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(m) => Self::Validation(m),
            AuthError::NotFound => Self::not_found("User"),
            AuthError::Repository(m) => Self::Db(m),
            other => Self::Internal(other.to_string()),
        }
    }
}
