use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod auth;
pub mod cars;
pub mod configurations;
pub mod extra_features;
pub mod locations;
pub mod providers;
pub mod regions;
pub mod rental_objects;
pub mod rentals;
pub mod reviews;
pub mod users;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, auth, resources and user administration
pub fn build_router(state: auth::ServerState, cors: CorsLayer) -> Router {
    let auth_routes = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me));

    Router::new()
        .route("/health", get(health))
        .merge(auth_routes)
        .merge(cars::router())
        .merge(configurations::router())
        .merge(extra_features::router())
        .merge(locations::router())
        .merge(providers::router())
        .merge(regions::router())
        .merge(rental_objects::router())
        .merge(rentals::router())
        .merge(reviews::router())
        .merge(users::router())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
