use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::{self, not_blank};
use crate::{configuration, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub user_id: i32,
    pub configuration_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User, Configuration }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Configuration => Entity::belongs_to(configuration::Entity)
                .from(Column::ConfigurationId)
                .to(configuration::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewInput {
    pub rating: i32,
    pub text: String,
}

impl ReviewInput {
    pub fn is_valid(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating) && not_blank(&self.text)
    }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.is_valid() { Ok(()) } else { Err(errors::ModelError::invalid("Review")) }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.rating = Set(self.rating);
        am.text = Set(self.text);
    }
}

pub async fn create(
    db: &DatabaseConnection,
    user_id: i32,
    configuration_id: i32,
    input: ReviewInput,
) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let mut am = ActiveModel { user_id: Set(user_id), configuration_id: Set(configuration_id), ..Default::default() };
    input.apply(&mut am);
    Ok(am.insert(db).await?)
}
