use axum::{extract::State, http::StatusCode, routing::{get, put}, Json, Router};

use models::provider::ProviderInput;
use service::access::Requirement;
use service::provider_service::{self, ProviderView};

use super::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/providers", get(list).post(create))
        .route("/api/providers/:id", get(fetch).put(update).delete(remove))
        .route("/api/providers/:id/region/add/:region_id", put(add_region))
        .route("/api/providers/:id/region/remove/:region_id", put(remove_region))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ProviderView>>, ApiError> {
    Ok(Json(provider_service::list_providers(&state.db).await?))
}

pub async fn fetch(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<ProviderView>, ApiError> {
    provider_service::get_provider(&state.db, id).await?.map(Json).ok_or_else(|| ApiError::not_found("Provider"))
}

pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiJson(input): ApiJson<ProviderInput>,
) -> Result<(StatusCode, Json<i32>), ApiError> {
    user.require(Requirement::Admin)?;
    let id = provider_service::add_provider(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<ProviderInput>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match provider_service::update_provider(&state.db, id, input).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Provider")),
    }
}

pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match provider_service::delete_provider(&state.db, id).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Provider")),
    }
}

/// 为供应商添加运营区域（重复添加无副作用）
pub async fn add_region(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath((id, region_id)): ApiPath<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    provider_service::add_region(&state.db, id, region_id).await?;
    Ok(StatusCode::OK)
}

pub async fn remove_region(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath((id, region_id)): ApiPath<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    provider_service::remove_region(&state.db, id, region_id).await?;
    Ok(StatusCode::OK)
}
