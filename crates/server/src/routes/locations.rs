use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};

use models::location::{self, LocationInput};
use service::access::Requirement;
use service::location_service;

use super::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/locations", get(list))
        .route("/api/locations/:id", get(fetch).put(update).delete(remove))
        .route("/api/locations/region/:region_id", post(create))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<location::Model>>, ApiError> {
    Ok(Json(location_service::list_locations(&state.db).await?))
}

pub async fn fetch(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<location::Model>, ApiError> {
    location_service::get_location(&state.db, id).await?.map(Json).ok_or_else(|| ApiError::not_found("Location"))
}

/// Create a location inside `region_id`.
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(region_id): ApiPath<i32>,
    ApiJson(input): ApiJson<LocationInput>,
) -> Result<(StatusCode, Json<i32>), ApiError> {
    user.require(Requirement::Admin)?;
    let id = location_service::add_location(&state.db, region_id, input).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<LocationInput>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match location_service::update_location(&state.db, id, input).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Location")),
    }
}

pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match location_service::delete_location(&state.db, id).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Location")),
    }
}
