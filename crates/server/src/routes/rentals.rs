use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};

use models::rental::{self, RentalInput, RentalRefs};
use service::access::Requirement;
use service::rental_service;

use super::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/rentals", get(list))
        .route("/api/rentals/:id", get(fetch).put(update).delete(remove))
        .route(
            "/api/rentals/rental-object/:rental_object_id/pickup/:pick_up_id/dropoff/:drop_off_id",
            post(create),
        )
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<rental::Model>>, ApiError> {
    Ok(Json(rental_service::list_rentals(&state.db).await?))
}

pub async fn fetch(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<rental::Model>, ApiError> {
    rental_service::get_rental(&state.db, id).await?.map(Json).ok_or_else(|| ApiError::not_found("Rental"))
}

/// Book a rental object for the calling user. Any active user may book.
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath((rental_object_id, pick_up_id, drop_off_id)): ApiPath<(i32, i32, i32)>,
    ApiJson(input): ApiJson<RentalInput>,
) -> Result<(StatusCode, Json<i32>), ApiError> {
    let principal = user.require(Requirement::Active)?;
    let refs = RentalRefs {
        rental_object_id,
        pick_up_location_id: pick_up_id,
        drop_off_location_id: drop_off_id,
        user_id: principal.id,
    };
    let id = rental_service::add_rental(&state.db, refs, input).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<RentalInput>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match rental_service::update_rental(&state.db, id, input).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Rental")),
    }
}

pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match rental_service::delete_rental(&state.db, id).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Rental")),
    }
}
