use sea_orm::{DatabaseConnection, ActiveModelTrait};
use tracing::info;

use models::{configuration, extra_feature::{self, ExtraFeatureInput}};
use crate::{crud, errors::ServiceError};

pub async fn list_extra_features(db: &DatabaseConnection) -> Result<Vec<extra_feature::Model>, ServiceError> {
    crud::list::<extra_feature::Entity>(db).await
}

pub async fn get_extra_feature(db: &DatabaseConnection, id: i32) -> Result<Option<extra_feature::Model>, ServiceError> {
    crud::find::<extra_feature::Entity>(db, id).await
}

pub async fn add_extra_feature(db: &DatabaseConnection, configuration_id: i32, input: ExtraFeatureInput) -> Result<i32, ServiceError> {
    crud::require::<configuration::Entity>(db, configuration_id, "Configuration").await?;
    let created = extra_feature::create(db, configuration_id, input).await?;
    info!(extra_feature_id = created.id, configuration_id, "extra_feature_created");
    Ok(created.id)
}

pub async fn update_extra_feature(db: &DatabaseConnection, id: i32, input: ExtraFeatureInput) -> Result<bool, ServiceError> {
    input.validate()?;
    let Some(found) = crud::find::<extra_feature::Entity>(db, id).await? else { return Ok(false) };
    let mut am: extra_feature::ActiveModel = found.into();
    input.apply(&mut am);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(true)
}

pub async fn delete_extra_feature(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    crud::delete::<extra_feature::Entity>(db, id).await
}
