//! Entity-agnostic storage helpers shared by the per-entity services.
use sea_orm::{
    DatabaseConnection, EntityTrait, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};

use crate::errors::ServiceError;

/// All rows, ordered by primary key.
pub async fn list<E>(db: &DatabaseConnection) -> Result<Vec<E::Model>, ServiceError>
where
    E: EntityTrait,
{
    let mut query = E::find();
    for key in E::PrimaryKey::iter() {
        query = query.order_by_asc(key.into_column());
    }
    query.all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn find<E>(db: &DatabaseConnection, id: i32) -> Result<Option<E::Model>, ServiceError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    E::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Load a parent row or fail with `"<entity> does not exist"`.
pub async fn require<E>(db: &DatabaseConnection, id: i32, entity: &str) -> Result<E::Model, ServiceError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    find::<E>(db, id).await?.ok_or_else(|| ServiceError::not_found(entity))
}

/// Returns `true` if a row was removed.
pub async fn delete<E>(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let res = E::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
