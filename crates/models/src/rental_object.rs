use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{configuration, provider};

/// A concrete, priced, bookable unit distributed by a provider for a configuration.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rental_object")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: f64,
    pub available: bool,
    pub visible: bool,
    pub provider_id: i32,
    pub configuration_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Provider, Configuration }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Provider => Entity::belongs_to(provider::Entity).from(Column::ProviderId).to(provider::Column::Id).into(),
            Relation::Configuration => Entity::belongs_to(configuration::Entity)
                .from(Column::ConfigurationId)
                .to(configuration::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn default_true() -> bool { true }

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalObjectInput {
    pub price: f64,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl RentalObjectInput {
    /// NaN prices fail the comparison and are rejected.
    pub fn is_valid(&self) -> bool { self.price >= 0.0 }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.is_valid() { Ok(()) } else { Err(errors::ModelError::invalid("Rental object")) }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.price = Set(self.price);
        am.available = Set(self.available);
        am.visible = Set(self.visible);
    }
}

pub async fn create(
    db: &DatabaseConnection,
    provider_id: i32,
    configuration_id: i32,
    input: RentalObjectInput,
) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let mut am = ActiveModel {
        provider_id: Set(provider_id),
        configuration_id: Set(configuration_id),
        ..Default::default()
    };
    input.apply(&mut am);
    Ok(am.insert(db).await?)
}
