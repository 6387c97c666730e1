use sea_orm::{entity::prelude::*, Set, DatabaseConnection, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{provider, region};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "provider_region")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub provider_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub region_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Provider, Region }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Provider => Entity::belongs_to(provider::Entity).from(Column::ProviderId).to(provider::Column::Id).into(),
            Relation::Region => Entity::belongs_to(region::Entity).from(Column::RegionId).to(region::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Link a provider to a region; linking twice is a no-op.
pub async fn link(db: &DatabaseConnection, provider_id: i32, region_id: i32) -> Result<bool, errors::ModelError> {
    if Entity::find_by_id((provider_id, region_id)).one(db).await?.is_some() {
        return Ok(false);
    }
    let am = ActiveModel { provider_id: Set(provider_id), region_id: Set(region_id) };
    am.insert(db).await?;
    Ok(true)
}

/// Remove a provider/region link. Returns whether a link existed.
pub async fn unlink(db: &DatabaseConnection, provider_id: i32, region_id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::ProviderId.eq(provider_id))
        .filter(Column::RegionId.eq(region_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}
