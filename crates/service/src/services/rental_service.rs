use sea_orm::{DatabaseConnection, ActiveModelTrait};
use tracing::info;

use models::{location, rental::{self, RentalInput, RentalRefs}, rental_object};
use crate::{crud, errors::ServiceError};

pub async fn list_rentals(db: &DatabaseConnection) -> Result<Vec<rental::Model>, ServiceError> {
    crud::list::<rental::Entity>(db).await
}

pub async fn get_rental(db: &DatabaseConnection, id: i32) -> Result<Option<rental::Model>, ServiceError> {
    crud::find::<rental::Entity>(db, id).await
}

/// Book a rental object for `refs.user_id`.
///
/// Missing parents are reported in a fixed order: pick-up location,
/// drop-off location, then rental object.
pub async fn add_rental(db: &DatabaseConnection, refs: RentalRefs, input: RentalInput) -> Result<i32, ServiceError> {
    crud::require::<location::Entity>(db, refs.pick_up_location_id, "Pick up location").await?;
    crud::require::<location::Entity>(db, refs.drop_off_location_id, "Drop off location").await?;
    crud::require::<rental_object::Entity>(db, refs.rental_object_id, "Rental object").await?;
    let created = rental::create(db, refs, input).await?;
    info!(
        rental_id = created.id,
        rental_object_id = created.rental_object_id,
        user_id = created.user_id,
        start = created.start_time,
        end = created.end_time,
        "rental_created"
    );
    Ok(created.id)
}

/// Move the rental window.
pub async fn update_rental(db: &DatabaseConnection, id: i32, input: RentalInput) -> Result<bool, ServiceError> {
    input.validate()?;
    let Some(found) = crud::find::<rental::Entity>(db, id).await? else { return Ok(false) };
    let mut am: rental::ActiveModel = found.into();
    input.apply(&mut am);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(true)
}

pub async fn delete_rental(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    crud::delete::<rental::Entity>(db, id).await
}
