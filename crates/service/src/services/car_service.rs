use sea_orm::{DatabaseConnection, ActiveModelTrait};
use tracing::info;

use models::car::{self, CarInput};
use crate::{crud, errors::ServiceError};

pub async fn list_cars(db: &DatabaseConnection) -> Result<Vec<car::Model>, ServiceError> {
    crud::list::<car::Entity>(db).await
}

pub async fn get_car(db: &DatabaseConnection, id: i32) -> Result<Option<car::Model>, ServiceError> {
    crud::find::<car::Entity>(db, id).await
}

/// Create a car and return its generated id.
pub async fn add_car(db: &DatabaseConnection, input: CarInput) -> Result<i32, ServiceError> {
    let created = car::create(db, input).await?;
    info!(car_id = created.id, make = %created.make, "car_created");
    Ok(created.id)
}

/// Overwrite make, model and year. `Ok(false)` when the car does not exist.
pub async fn update_car(db: &DatabaseConnection, id: i32, input: CarInput) -> Result<bool, ServiceError> {
    input.validate()?;
    let Some(found) = crud::find::<car::Entity>(db, id).await? else { return Ok(false) };
    let mut am: car::ActiveModel = found.into();
    input.apply(&mut am);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(true)
}

pub async fn delete_car(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    crud::delete::<car::Entity>(db, id).await
}
