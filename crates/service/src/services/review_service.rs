use sea_orm::{DatabaseConnection, ActiveModelTrait};
use tracing::info;

use models::{configuration, review::{self, ReviewInput}};
use crate::{crud, errors::ServiceError};

pub async fn list_reviews(db: &DatabaseConnection) -> Result<Vec<review::Model>, ServiceError> {
    crud::list::<review::Entity>(db).await
}

pub async fn get_review(db: &DatabaseConnection, id: i32) -> Result<Option<review::Model>, ServiceError> {
    crud::find::<review::Entity>(db, id).await
}

/// Record a review of a configuration, authored by `user_id`.
pub async fn add_review(db: &DatabaseConnection, user_id: i32, configuration_id: i32, input: ReviewInput) -> Result<i32, ServiceError> {
    crud::require::<configuration::Entity>(db, configuration_id, "Configuration").await?;
    let created = review::create(db, user_id, configuration_id, input).await?;
    info!(review_id = created.id, configuration_id, user_id, rating = created.rating, "review_created");
    Ok(created.id)
}

pub async fn update_review(db: &DatabaseConnection, id: i32, input: ReviewInput) -> Result<bool, ServiceError> {
    input.validate()?;
    let Some(found) = crud::find::<review::Entity>(db, id).await? else { return Ok(false) };
    let mut am: review::ActiveModel = found.into();
    input.apply(&mut am);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(true)
}

pub async fn delete_review(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    crud::delete::<review::Entity>(db, id).await
}
