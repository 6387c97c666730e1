use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use models::car::{self, CarInput};
use service::access::Requirement;
use service::car_service;

use super::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/cars", get(list).post(create))
        .route("/api/cars/:id", get(fetch).put(update).delete(remove))
}

/// 列出所有车辆
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<car::Model>>, ApiError> {
    Ok(Json(car_service::list_cars(&state.db).await?))
}

/// 获取指定车辆
pub async fn fetch(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<car::Model>, ApiError> {
    car_service::get_car(&state.db, id).await?.map(Json).ok_or_else(|| ApiError::not_found("Car"))
}

/// 创建车辆（管理员）
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiJson(input): ApiJson<CarInput>,
) -> Result<(StatusCode, Json<i32>), ApiError> {
    user.require(Requirement::Admin)?;
    let id = car_service::add_car(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// 更新车辆（管理员）
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<CarInput>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    if car_service::update_car(&state.db, id, input).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::not_found("Car"))
    }
}

/// 删除车辆（管理员）
pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    if car_service::delete_car(&state.db, id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::not_found("Car"))
    }
}
