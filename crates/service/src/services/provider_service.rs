use sea_orm::{DatabaseConnection, ActiveModelTrait, ModelTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::{provider::{self, ProviderInput}, provider_region, region};
use crate::{crud, errors::ServiceError};

/// A provider together with the regions it operates in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderView {
    pub id: i32,
    pub name: String,
    pub regions: Vec<region::Model>,
}

async fn view(db: &DatabaseConnection, p: provider::Model) -> Result<ProviderView, ServiceError> {
    let regions = p
        .find_related(region::Entity)
        .order_by_asc(region::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(ProviderView { id: p.id, name: p.name, regions })
}

pub async fn list_providers(db: &DatabaseConnection) -> Result<Vec<ProviderView>, ServiceError> {
    let mut out = Vec::new();
    for p in crud::list::<provider::Entity>(db).await? {
        out.push(view(db, p).await?);
    }
    Ok(out)
}

pub async fn get_provider(db: &DatabaseConnection, id: i32) -> Result<Option<ProviderView>, ServiceError> {
    match crud::find::<provider::Entity>(db, id).await? {
        Some(p) => Ok(Some(view(db, p).await?)),
        None => Ok(None),
    }
}

pub async fn add_provider(db: &DatabaseConnection, input: ProviderInput) -> Result<i32, ServiceError> {
    let created = provider::create(db, input).await?;
    info!(provider_id = created.id, name = %created.name, "provider_created");
    Ok(created.id)
}

/// Rename a provider.
pub async fn update_provider(db: &DatabaseConnection, id: i32, input: ProviderInput) -> Result<bool, ServiceError> {
    input.validate()?;
    let Some(found) = crud::find::<provider::Entity>(db, id).await? else { return Ok(false) };
    let mut am: provider::ActiveModel = found.into();
    input.apply(&mut am);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(true)
}

pub async fn delete_provider(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    crud::delete::<provider::Entity>(db, id).await
}

/// Let the provider operate in `region_id`. Adding an existing link is a no-op.
pub async fn add_region(db: &DatabaseConnection, provider_id: i32, region_id: i32) -> Result<(), ServiceError> {
    crud::require::<provider::Entity>(db, provider_id, "Provider").await?;
    crud::require::<region::Entity>(db, region_id, "Region").await?;
    if provider_region::link(db, provider_id, region_id).await? {
        info!(provider_id, region_id, "provider_region_added");
    }
    Ok(())
}

pub async fn remove_region(db: &DatabaseConnection, provider_id: i32, region_id: i32) -> Result<(), ServiceError> {
    crud::require::<provider::Entity>(db, provider_id, "Provider").await?;
    crud::require::<region::Entity>(db, region_id, "Region").await?;
    if provider_region::unlink(db, provider_id, region_id).await? {
        info!(provider_id, region_id, "provider_region_removed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::region_service;
    use crate::test_support::get_db;
    use models::region::RegionInput;

    #[tokio::test]
    async fn provider_regions_are_a_set() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let p = add_provider(&db, ProviderInput { name: "Fjord Cars".into() }).await?;
        let west = region_service::add_region(&db, RegionInput { name: "West".into() }).await?;

        add_region(&db, p, west).await?;
        add_region(&db, p, west).await?;
        let view = get_provider(&db, p).await?.unwrap();
        assert_eq!(view.regions.len(), 1);
        assert_eq!(view.regions[0].name, "West");

        remove_region(&db, p, west).await?;
        assert!(get_provider(&db, p).await?.unwrap().regions.is_empty());
        // removing an absent link is fine
        remove_region(&db, p, west).await?;
        Ok(())
    }

    #[tokio::test]
    async fn missing_provider_or_region() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let west = region_service::add_region(&db, RegionInput { name: "West".into() }).await?;
        let err = add_region(&db, 99, west).await.unwrap_err();
        assert_eq!(err.to_string(), "Provider does not exist");

        let p = add_provider(&db, ProviderInput { name: "P".into() }).await?;
        let err = remove_region(&db, p, 99).await.unwrap_err();
        assert_eq!(err.to_string(), "Region does not exist");

        let err = update_provider(&db, p, ProviderInput { name: "".into() }).await.unwrap_err();
        assert_eq!(err.to_string(), "Provider is invalid");
        Ok(())
    }
}
