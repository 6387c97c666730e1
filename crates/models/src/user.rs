use sea_orm::{entity::prelude::*, Set, DatabaseConnection, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{role, user_role};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl Related<role::Entity> for Entity {
    fn to() -> RelationDef { user_role::Relation::Role.def() }
    fn via() -> Option<RelationDef> { Some(user_role::Relation::User.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(errors::ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    Ok(())
}

/// Profile fields of a new account; the password is hashed before it gets here.
#[derive(Clone, Debug)]
pub struct NewUser<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub password_hash: String,
}

pub async fn create(db: &DatabaseConnection, new: NewUser<'_>) -> Result<Model, errors::ModelError> {
    validate_email(new.email)?;
    validate_name(new.first_name)?;
    validate_name(new.last_name)?;
    if new.password_hash.trim().is_empty() {
        return Err(errors::ModelError::Validation("password hash required".into()));
    }
    let am = ActiveModel {
        first_name: Set(new.first_name.to_string()),
        last_name: Set(new.last_name.to_string()),
        email: Set(new.email.trim().to_string()),
        phone_number: Set(new.phone_number.to_string()),
        password_hash: Set(new.password_hash),
        active: Set(true),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email.trim())).one(db).await?)
}

pub async fn set_active(db: &DatabaseConnection, id: i32, active: bool) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.active = Set(active);
    Ok(Some(am.update(db).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let m = Model {
            id: 1,
            first_name: "Kari".into(),
            last_name: "Nordmann".into(),
            email: "kari@example.com".into(),
            phone_number: "+47 555 01 234".into(),
            password_hash: "$argon2id$v=19$...".into(),
            active: true,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "kari@example.com");
    }

    #[test]
    fn email_needs_at_sign() {
        assert!(validate_email("nobody").is_err());
        assert!(validate_email(" ").is_err());
        assert!(validate_email("a@b.no").is_ok());
    }
}
