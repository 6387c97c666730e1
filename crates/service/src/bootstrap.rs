//! Startup seeding: the known roles, and an admin account for an empty user table.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::{info, warn};

use models::{role::{self, Role}, user, user_role};
use crate::auth::service::hash_password;
use crate::errors::ServiceError;

/// Make sure every [`Role`] has a row.
pub async fn ensure_roles(db: &DatabaseConnection) -> Result<(), ServiceError> {
    for r in Role::ALL {
        role::ensure(db, r.as_str()).await?;
    }
    Ok(())
}

/// Create the admin account when no users exist yet. Returns the new user's id.
pub async fn ensure_admin(db: &DatabaseConnection, email: &str, password: &str) -> Result<Option<i32>, ServiceError> {
    let users = user::Entity::find().count(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if users > 0 {
        return Ok(None);
    }
    let hash = hash_password(password)?;
    let admin = user::create(db, user::NewUser {
        first_name: "Admin",
        last_name: "Admin",
        email,
        phone_number: "",
        password_hash: hash,
    })
    .await?;
    user_role::grant(db, admin.id, Role::User).await?;
    user_role::grant(db, admin.id, Role::Admin).await?;
    info!(user_id = admin.id, email = %admin.email, "admin_bootstrapped");
    Ok(Some(admin.id))
}

/// Seed roles, then the admin account if one is configured.
pub async fn run(db: &DatabaseConnection, cfg: &configs::AuthConfig) -> Result<(), ServiceError> {
    ensure_roles(db).await?;
    match cfg.admin_credentials() {
        Some((email, password)) => {
            ensure_admin(db, email, password).await?;
        }
        None => warn!("no admin credentials configured; skipping admin bootstrap"),
    }
    Ok(())
}
