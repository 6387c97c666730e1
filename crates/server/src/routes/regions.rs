use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use models::region::{self, RegionInput};
use service::access::Requirement;
use service::region_service;

use super::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/regions", get(list).post(create))
        .route("/api/regions/:id", get(fetch).put(update).delete(remove))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<region::Model>>, ApiError> {
    Ok(Json(region_service::list_regions(&state.db).await?))
}

pub async fn fetch(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<region::Model>, ApiError> {
    region_service::get_region(&state.db, id).await?.map(Json).ok_or_else(|| ApiError::not_found("Region"))
}

pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiJson(input): ApiJson<RegionInput>,
) -> Result<(StatusCode, Json<i32>), ApiError> {
    user.require(Requirement::Admin)?;
    let id = region_service::add_region(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<RegionInput>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match region_service::update_region(&state.db, id, input).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Region")),
    }
}

pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match region_service::delete_region(&state.db, id).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Region")),
    }
}
