use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};

use models::rental_object::{self, RentalObjectInput};
use service::access::Requirement;
use service::rental_object_service;

use super::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/rentalobjects", get(list))
        .route("/api/rentalobjects/:id", get(fetch).put(update).delete(remove))
        .route("/api/rentalobjects/provider/:provider_id/configuration/:configuration_id", post(create))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<rental_object::Model>>, ApiError> {
    Ok(Json(rental_object_service::list_rental_objects(&state.db).await?))
}

pub async fn fetch(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<rental_object::Model>, ApiError> {
    rental_object_service::get_rental_object(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Rental object"))
}

pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath((provider_id, configuration_id)): ApiPath<(i32, i32)>,
    ApiJson(input): ApiJson<RentalObjectInput>,
) -> Result<(StatusCode, Json<i32>), ApiError> {
    user.require(Requirement::Admin)?;
    let id = rental_object_service::add_rental_object(&state.db, provider_id, configuration_id, input).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<RentalObjectInput>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match rental_object_service::update_rental_object(&state.db, id, input).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Rental object")),
    }
}

pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match rental_object_service::delete_rental_object(&state.db, id).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Rental object")),
    }
}
