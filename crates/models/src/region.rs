use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::{self, not_blank};
use crate::{provider, provider_region};

/// A geographic grouping of locations.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "region")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl Related<provider::Entity> for Entity {
    fn to() -> RelationDef { provider_region::Relation::Provider.def() }
    fn via() -> Option<RelationDef> { Some(provider_region::Relation::Region.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionInput {
    pub name: String,
}

impl RegionInput {
    pub fn is_valid(&self) -> bool { not_blank(&self.name) }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.is_valid() { Ok(()) } else { Err(errors::ModelError::invalid("Region")) }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.name = Set(self.name);
    }
}

pub async fn create(db: &DatabaseConnection, input: RegionInput) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let mut am = ActiveModel { ..Default::default() };
    input.apply(&mut am);
    Ok(am.insert(db).await?)
}
