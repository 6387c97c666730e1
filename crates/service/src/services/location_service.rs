use sea_orm::{DatabaseConnection, ActiveModelTrait};
use tracing::info;

use models::{location::{self, LocationInput}, region};
use crate::{crud, errors::ServiceError};

pub async fn list_locations(db: &DatabaseConnection) -> Result<Vec<location::Model>, ServiceError> {
    crud::list::<location::Entity>(db).await
}

pub async fn get_location(db: &DatabaseConnection, id: i32) -> Result<Option<location::Model>, ServiceError> {
    crud::find::<location::Entity>(db, id).await
}

/// Create a location inside an existing region.
pub async fn add_location(db: &DatabaseConnection, region_id: i32, input: LocationInput) -> Result<i32, ServiceError> {
    crud::require::<region::Entity>(db, region_id, "Region").await?;
    let created = location::create(db, region_id, input).await?;
    info!(location_id = created.id, region_id, "location_created");
    Ok(created.id)
}

pub async fn update_location(db: &DatabaseConnection, id: i32, input: LocationInput) -> Result<bool, ServiceError> {
    input.validate()?;
    let Some(found) = crud::find::<location::Entity>(db, id).await? else { return Ok(false) };
    let mut am: location::ActiveModel = found.into();
    input.apply(&mut am);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(true)
}

pub async fn delete_location(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    crud::delete::<location::Entity>(db, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::region_service;
    use crate::test_support::{get_db, seed_offer};
    use models::region::RegionInput;

    #[tokio::test]
    async fn location_requires_region() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let err = add_location(&db, 77, LocationInput { name: "Bergen".into() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Region does not exist"));

        let west = region_service::add_region(&db, RegionInput { name: "West".into() }).await?;
        // parent check runs before validation
        let err = add_location(&db, west, LocationInput { name: "".into() }).await.unwrap_err();
        assert!(err.is_validation());

        let id = add_location(&db, west, LocationInput { name: "Bergen".into() }).await?;
        assert_eq!(get_location(&db, id).await?.unwrap().region_id, west);

        // removing the region removes its locations
        assert!(region_service::delete_region(&db, west).await?);
        assert!(get_location(&db, id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn location_update_and_delete() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let offer = seed_offer(&db).await?;
        let id = offer.location_id;

        assert!(update_location(&db, id, LocationInput { name: "Bergen lufthavn".into() }).await?);
        let found = get_location(&db, id).await?.unwrap();
        assert_eq!(found.name, "Bergen lufthavn");

        let err = update_location(&db, id, LocationInput { name: "".into() }).await.unwrap_err();
        assert_eq!(err.to_string(), "Location is invalid");
        assert!(!update_location(&db, id + 50, LocationInput { name: "Voss".into() }).await?);

        assert!(delete_location(&db, id).await?);
        assert!(!delete_location(&db, id).await?);
        assert!(list_locations(&db).await?.is_empty());
        Ok(())
    }
}
