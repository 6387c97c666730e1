use async_trait::async_trait;

use models::role::Role;

use super::domain::{AuthUser, Credentials};
use super::errors::AuthError;

/// Profile data of an account being created.
#[derive(Debug, Clone)]
pub struct NewAccount<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
}

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError>;
    async fn create_user(&self, account: NewAccount<'_>, password_hash: String) -> Result<AuthUser, AuthError>;
    async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError>;
    async fn grant_role(&self, user_id: i32, role: Role) -> Result<(), AuthError>;
}
