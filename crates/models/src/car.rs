use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::{self, not_blank};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Payload for creating or replacing a car.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarInput {
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl CarInput {
    pub fn is_valid(&self) -> bool {
        not_blank(&self.make) && not_blank(&self.model) && self.year >= 0
    }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.is_valid() { Ok(()) } else { Err(errors::ModelError::invalid("Car")) }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.make = Set(self.make);
        am.model = Set(self.model);
        am.year = Set(self.year);
    }
}

pub async fn create(db: &DatabaseConnection, input: CarInput) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let mut am = ActiveModel { ..Default::default() };
    input.apply(&mut am);
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(make: &str, model: &str, year: i32) -> CarInput {
        CarInput { make: make.into(), model: model.into(), year }
    }

    #[test]
    fn validity() {
        assert!(input("Volvo", "V70", 2004).is_valid());
        assert!(input("Volvo", "V70", 0).is_valid());
        assert!(!input(" ", "V70", 2004).is_valid());
        assert!(!input("Volvo", "", 2004).is_valid());
        assert!(!input("Volvo", "V70", -1).is_valid());
    }

    #[test]
    fn invalid_message() {
        let err = input("", "", -1).validate().unwrap_err();
        assert_eq!(err.to_string(), "Car is invalid");
    }
}
