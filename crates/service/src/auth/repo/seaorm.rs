use sea_orm::DatabaseConnection;

use models::{role::Role, user, user_role};

use crate::auth::domain::{AuthUser, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::{AuthRepository, NewAccount};

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn to_auth_user(u: user::Model) -> AuthUser {
    AuthUser { id: u.id, email: u.email, first_name: u.first_name, last_name: u.last_name, active: u.active }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
        let found = user::find_by_email(&self.db, email).await?;
        Ok(found.map(to_auth_user))
    }

    async fn create_user(&self, account: NewAccount<'_>, password_hash: String) -> Result<AuthUser, AuthError> {
        let created = user::create(&self.db, user::NewUser {
            first_name: account.first_name,
            last_name: account.last_name,
            email: account.email,
            phone_number: account.phone_number,
            password_hash,
        })
        .await?;
        Ok(to_auth_user(created))
    }

    async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError> {
        use sea_orm::EntityTrait;
        let found = user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(found.map(|u| Credentials { user_id: u.id, password_hash: u.password_hash }))
    }

    async fn grant_role(&self, user_id: i32, role: Role) -> Result<(), AuthError> {
        user_role::grant(&self.db, user_id, role).await?;
        Ok(())
    }
}
