use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::{self, not_blank};
use crate::region;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub region_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Region }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Region => Entity::belongs_to(region::Entity).from(Column::RegionId).to(region::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    pub name: String,
}

impl LocationInput {
    pub fn is_valid(&self) -> bool { not_blank(&self.name) }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.is_valid() { Ok(()) } else { Err(errors::ModelError::invalid("Location")) }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.name = Set(self.name);
    }
}

pub async fn create(db: &DatabaseConnection, region_id: i32, input: LocationInput) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let mut am = ActiveModel { region_id: Set(region_id), ..Default::default() };
    input.apply(&mut am);
    Ok(am.insert(db).await?)
}
