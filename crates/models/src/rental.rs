use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{location, rental_object, user};

/// A booked time window (epoch seconds) on a rental object.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rental")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub start_time: i64,
    pub end_time: i64,
    pub pick_up_location_id: i32,
    pub drop_off_location_id: i32,
    pub rental_object_id: i32,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { PickUpLocation, DropOffLocation, RentalObject, User }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PickUpLocation => Entity::belongs_to(location::Entity).from(Column::PickUpLocationId).to(location::Column::Id).into(),
            Relation::DropOffLocation => Entity::belongs_to(location::Entity).from(Column::DropOffLocationId).to(location::Column::Id).into(),
            Relation::RentalObject => Entity::belongs_to(rental_object::Entity)
                .from(Column::RentalObjectId)
                .to(rental_object::Column::Id)
                .into(),
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalInput {
    pub start_time: i64,
    pub end_time: i64,
}

impl RentalInput {
    // start <= end is not enforced
    pub fn is_valid(&self) -> bool { self.start_time >= 0 && self.end_time >= 0 }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.is_valid() { Ok(()) } else { Err(errors::ModelError::invalid("Rental")) }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.start_time = Set(self.start_time);
        am.end_time = Set(self.end_time);
    }
}

/// Foreign keys of a new rental.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RentalRefs {
    pub rental_object_id: i32,
    pub pick_up_location_id: i32,
    pub drop_off_location_id: i32,
    pub user_id: i32,
}

pub async fn create(db: &DatabaseConnection, refs: RentalRefs, input: RentalInput) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let mut am = ActiveModel {
        rental_object_id: Set(refs.rental_object_id),
        pick_up_location_id: Set(refs.pick_up_location_id),
        drop_off_location_id: Set(refs.drop_off_location_id),
        user_id: Set(refs.user_id),
        ..Default::default()
    };
    input.apply(&mut am);
    Ok(am.insert(db).await?)
}
