use sea_orm::DatabaseConnection;
use tracing::info;

use models::user;
use crate::{crud, errors::ServiceError};

/// List all users, ordered by id.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, ServiceError> {
    crud::list::<user::Entity>(db).await
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<Option<user::Model>, ServiceError> {
    crud::find::<user::Entity>(db, id).await
}

/// Activate or deactivate a user. `Ok(false)` when the user does not exist.
pub async fn set_active(db: &DatabaseConnection, id: i32, active: bool) -> Result<bool, ServiceError> {
    let updated = user::set_active(db, id, active).await?;
    if let Some(u) = &updated {
        info!(user_id = u.id, active, "user_active_changed");
    }
    Ok(updated.is_some())
}
