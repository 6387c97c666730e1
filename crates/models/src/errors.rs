use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn invalid(entity: &str) -> Self { Self::Validation(format!("{} is invalid", entity)) }
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

/// `true` when the string holds at least one non-whitespace character.
pub fn not_blank(s: &str) -> bool { !s.trim().is_empty() }
