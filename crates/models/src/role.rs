use std::fmt;

use sea_orm::{entity::prelude::*, Set, DatabaseConnection, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::errors::{self, not_blank};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Roles known to the authorization gate. Stored role names outside this set grant nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }

    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Name.eq(name)).one(db).await?)
}

/// Fetch the row for `name`, inserting it when missing.
pub async fn ensure(db: &DatabaseConnection, name: &str) -> Result<Model, errors::ModelError> {
    if !not_blank(name) {
        return Err(errors::ModelError::invalid("Role"));
    }
    if let Some(existing) = find_by_name(db, name).await? {
        return Ok(existing);
    }
    let am = ActiveModel { name: Set(name.to_string()), ..Default::default() };
    Ok(am.insert(db).await?)
}
