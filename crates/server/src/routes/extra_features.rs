use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};

use models::extra_feature::{self, ExtraFeatureInput};
use service::access::Requirement;
use service::extra_feature_service;

use super::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/extrafeatures", get(list))
        .route("/api/extrafeatures/:id", get(fetch).put(update).delete(remove))
        .route("/api/extrafeatures/configuration/:configuration_id", post(create))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<extra_feature::Model>>, ApiError> {
    Ok(Json(extra_feature_service::list_extra_features(&state.db).await?))
}

pub async fn fetch(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<extra_feature::Model>, ApiError> {
    extra_feature_service::get_extra_feature(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Extra feature"))
}

pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(configuration_id): ApiPath<i32>,
    ApiJson(input): ApiJson<ExtraFeatureInput>,
) -> Result<(StatusCode, Json<i32>), ApiError> {
    user.require(Requirement::Admin)?;
    let id = extra_feature_service::add_extra_feature(&state.db, configuration_id, input).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<ExtraFeatureInput>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match extra_feature_service::update_extra_feature(&state.db, id, input).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Extra feature")),
    }
}

pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match extra_feature_service::delete_extra_feature(&state.db, id).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Extra feature")),
    }
}
