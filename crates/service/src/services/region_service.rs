use sea_orm::{DatabaseConnection, ActiveModelTrait};
use tracing::info;

use models::region::{self, RegionInput};
use crate::{crud, errors::ServiceError};

pub async fn list_regions(db: &DatabaseConnection) -> Result<Vec<region::Model>, ServiceError> {
    crud::list::<region::Entity>(db).await
}

pub async fn get_region(db: &DatabaseConnection, id: i32) -> Result<Option<region::Model>, ServiceError> {
    crud::find::<region::Entity>(db, id).await
}

pub async fn add_region(db: &DatabaseConnection, input: RegionInput) -> Result<i32, ServiceError> {
    let created = region::create(db, input).await?;
    info!(region_id = created.id, name = %created.name, "region_created");
    Ok(created.id)
}

pub async fn update_region(db: &DatabaseConnection, id: i32, input: RegionInput) -> Result<bool, ServiceError> {
    input.validate()?;
    let Some(found) = crud::find::<region::Entity>(db, id).await? else { return Ok(false) };
    let mut am: region::ActiveModel = found.into();
    input.apply(&mut am);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(true)
}

pub async fn delete_region(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    crud::delete::<region::Entity>(db, id).await
}
