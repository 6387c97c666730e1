use axum::{extract::State, http::StatusCode, routing::{get, put}, Json, Router};
use serde::Deserialize;

use models::user;
use service::access::Requirement;
use service::user_service;

use super::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/users", get(list))
        .route("/api/users/:id", get(fetch))
        .route("/api/users/:id/active", put(set_active))
}

#[derive(Debug, Deserialize)]
pub struct ActiveInput {
    pub active: bool,
}

/// 用户列表（管理员）
pub async fn list(State(state): State<ServerState>, user: CurrentUser) -> Result<Json<Vec<user::Model>>, ApiError> {
    user.require(Requirement::Admin)?;
    Ok(Json(user_service::list_users(&state.db).await?))
}

pub async fn fetch(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<user::Model>, ApiError> {
    user.require(Requirement::Admin)?;
    user_service::get_user(&state.db, id).await?.map(Json).ok_or_else(|| ApiError::not_found("User"))
}

/// 启用/停用用户；停用后的用户无法再通过访问校验
pub async fn set_active(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<ActiveInput>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match user_service::set_active(&state.db, id, input.active).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("User")),
    }
}
