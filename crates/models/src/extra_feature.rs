use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::{self, not_blank};
use crate::configuration;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "extra_feature")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub configuration_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Configuration }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Configuration => Entity::belongs_to(configuration::Entity)
                .from(Column::ConfigurationId)
                .to(configuration::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtraFeatureInput {
    pub name: String,
}

impl ExtraFeatureInput {
    pub fn is_valid(&self) -> bool { not_blank(&self.name) }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.is_valid() { Ok(()) } else { Err(errors::ModelError::invalid("Extra feature")) }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.name = Set(self.name);
    }
}

pub async fn create(db: &DatabaseConnection, configuration_id: i32, input: ExtraFeatureInput) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let mut am = ActiveModel { configuration_id: Set(configuration_id), ..Default::default() };
    input.apply(&mut am);
    Ok(am.insert(db).await?)
}
