use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};

use models::review::{self, ReviewInput};
use service::access::Requirement;
use service::review_service;

use super::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/reviews", get(list))
        .route("/api/reviews/:id", get(fetch).put(update).delete(remove))
        .route("/api/reviews/configuration/:configuration_id", post(create))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<review::Model>>, ApiError> {
    Ok(Json(review_service::list_reviews(&state.db).await?))
}

pub async fn fetch(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<review::Model>, ApiError> {
    review_service::get_review(&state.db, id).await?.map(Json).ok_or_else(|| ApiError::not_found("Review"))
}

/// The review is attributed to the calling admin.
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(configuration_id): ApiPath<i32>,
    ApiJson(input): ApiJson<ReviewInput>,
) -> Result<(StatusCode, Json<i32>), ApiError> {
    let principal = user.require(Requirement::Admin)?;
    let id = review_service::add_review(&state.db, principal.id, configuration_id, input).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<ReviewInput>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match review_service::update_review(&state.db, id, input).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Review")),
    }
}

pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match review_service::delete_review(&state.db, id).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Review")),
    }
}
