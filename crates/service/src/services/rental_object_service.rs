use sea_orm::{DatabaseConnection, ActiveModelTrait};
use tracing::info;

use models::{configuration, provider, rental_object::{self, RentalObjectInput}};
use crate::{crud, errors::ServiceError};

pub async fn list_rental_objects(db: &DatabaseConnection) -> Result<Vec<rental_object::Model>, ServiceError> {
    crud::list::<rental_object::Entity>(db).await
}

pub async fn get_rental_object(db: &DatabaseConnection, id: i32) -> Result<Option<rental_object::Model>, ServiceError> {
    crud::find::<rental_object::Entity>(db, id).await
}

/// Offer a configuration through a provider. The provider is checked before the configuration.
pub async fn add_rental_object(
    db: &DatabaseConnection,
    provider_id: i32,
    configuration_id: i32,
    input: RentalObjectInput,
) -> Result<i32, ServiceError> {
    crud::require::<provider::Entity>(db, provider_id, "Provider").await?;
    crud::require::<configuration::Entity>(db, configuration_id, "Configuration").await?;
    let created = rental_object::create(db, provider_id, configuration_id, input).await?;
    info!(rental_object_id = created.id, provider_id, configuration_id, price = created.price, "rental_object_created");
    Ok(created.id)
}

/// Overwrite price and the available/visible flags.
pub async fn update_rental_object(db: &DatabaseConnection, id: i32, input: RentalObjectInput) -> Result<bool, ServiceError> {
    input.validate()?;
    let Some(found) = crud::find::<rental_object::Entity>(db, id).await? else { return Ok(false) };
    let mut am: rental_object::ActiveModel = found.into();
    input.apply(&mut am);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(true)
}

pub async fn delete_rental_object(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    crud::delete::<rental_object::Entity>(db, id).await
}
