use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::{self, not_blank};
use crate::car;

/// A purchasable variant of a car (trim, fuel, transmission, seats).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "configuration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub fuel_type: String,
    pub transmission_type: String,
    pub number_of_seats: i32,
    pub car_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Car }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Car => Entity::belongs_to(car::Entity).from(Column::CarId).to(car::Column::Id).into(),
        }
    }
}

impl Related<car::Entity> for Entity {
    fn to() -> RelationDef { Relation::Car.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationInput {
    pub name: String,
    pub fuel_type: String,
    pub transmission_type: String,
    pub number_of_seats: i32,
}

impl ConfigurationInput {
    pub fn is_valid(&self) -> bool {
        not_blank(&self.name)
            && not_blank(&self.fuel_type)
            && not_blank(&self.transmission_type)
            && self.number_of_seats > 0
    }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.is_valid() { Ok(()) } else { Err(errors::ModelError::invalid("Configuration")) }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.name = Set(self.name);
        am.fuel_type = Set(self.fuel_type);
        am.transmission_type = Set(self.transmission_type);
        am.number_of_seats = Set(self.number_of_seats);
    }
}

pub async fn create(db: &DatabaseConnection, car_id: i32, input: ConfigurationInput) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let mut am = ActiveModel { car_id: Set(car_id), ..Default::default() };
    input.apply(&mut am);
    Ok(am.insert(db).await?)
}
