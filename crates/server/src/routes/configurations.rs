use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};
use serde::Deserialize;

use models::configuration::{self, ConfigurationInput};
use service::access::Requirement;
use service::availability::SearchQuery;
use service::configuration_service::{self, ConfigurationSummary};

use super::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/configurations", get(list))
        .route("/api/configurations/search", get(summaries))
        .route("/api/configurations/available", post(available))
        .route("/api/configurations/car/:car_id", post(create))
        .route("/api/configurations/:id", get(fetch).put(update).delete(remove))
}

/// Body of an availability search. Times are epoch seconds.
#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    #[serde(default)]
    pub pick_up_location_id: Option<i32>,
    #[serde(default)]
    pub drop_off_location_id: Option<i32>,
    pub start_time: i64,
    pub end_time: i64,
}

impl From<AvailabilityRequest> for SearchQuery {
    fn from(r: AvailabilityRequest) -> Self {
        SearchQuery {
            pick_up_location: r.pick_up_location_id,
            drop_off_location: r.drop_off_location_id,
            start_time: r.start_time,
            end_time: r.end_time,
        }
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<configuration::Model>>, ApiError> {
    Ok(Json(configuration_service::list_configurations(&state.db).await?))
}

pub async fn fetch(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<configuration::Model>, ApiError> {
    configuration_service::get_configuration(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Configuration"))
}

/// 车型配置摘要：含最低租赁价格
pub async fn summaries(State(state): State<ServerState>) -> Result<Json<Vec<ConfigurationSummary>>, ApiError> {
    Ok(Json(configuration_service::list_summaries(&state.db).await?))
}

/// 可用性搜索：按时间窗口与取还车地点过滤
pub async fn available(
    State(state): State<ServerState>,
    ApiJson(req): ApiJson<AvailabilityRequest>,
) -> Result<Json<Vec<configuration::Model>>, ApiError> {
    let found = configuration_service::search_available(&state.db, req.into()).await?;
    Ok(Json(found))
}

pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(car_id): ApiPath<i32>,
    ApiJson(input): ApiJson<ConfigurationInput>,
) -> Result<(StatusCode, Json<i32>), ApiError> {
    user.require(Requirement::Admin)?;
    let id = configuration_service::add_configuration(&state.db, car_id, input).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<ConfigurationInput>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match configuration_service::update_configuration(&state.db, id, input).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Configuration")),
    }
}

pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    user.require(Requirement::Admin)?;
    match configuration_service::delete_configuration(&state.db, id).await? {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::not_found("Configuration")),
    }
}
