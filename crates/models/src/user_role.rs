use std::collections::HashSet;

use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ModelTrait};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::role::{self, Role};
use crate::user;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_role")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub role_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User, Role }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Role => Entity::belongs_to(role::Entity).from(Column::RoleId).to(role::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Grant `role` to a user, creating the role row if needed.
pub async fn grant(db: &DatabaseConnection, user_id: i32, role: Role) -> Result<(), errors::ModelError> {
    let role_row = role::ensure(db, role.as_str()).await?;
    if Entity::find_by_id((user_id, role_row.id)).one(db).await?.is_some() {
        return Ok(());
    }
    let am = ActiveModel { user_id: Set(user_id), role_id: Set(role_row.id) };
    am.insert(db).await?;
    Ok(())
}

/// Roles held by the user; unrecognised role names are skipped.
pub async fn roles_of(db: &DatabaseConnection, user: &user::Model) -> Result<HashSet<Role>, errors::ModelError> {
    let rows = user.find_related(role::Entity).all(db).await?;
    Ok(rows.iter().filter_map(|r| Role::from_name(&r.name)).collect())
}
