#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use configs::{AppConfig, AuthConfig, DatabaseConfig};
use serde_json::Value;
use tower::Service;

pub const ADMIN_EMAIL: &str = "admin@rental.test";
pub const ADMIN_PASSWORD: &str = "AdminPass123";

/// In-memory database, bootstrap admin, fixed secret.
pub fn test_config() -> AppConfig {
    AppConfig {
        database: DatabaseConfig::sqlite_memory(),
        auth: AuthConfig {
            jwt_secret: "test-secret".into(),
            token_ttl_hours: 1,
            admin_email: Some(ADMIN_EMAIL.into()),
            admin_password: Some(ADMIN_PASSWORD.into()),
        },
        ..AppConfig::default()
    }
}

pub async fn build_app() -> anyhow::Result<Router> {
    Ok(server::startup::build_app(&test_config()).await?)
}

/// Send one request through the router and decode the JSON body (`Null` when empty).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {}", t));
    }
    let req = match body {
        Some(v) => req.header(header::CONTENT_TYPE, "application/json").body(Body::from(serde_json::to_vec(&v)?))?,
        None => req.body(Body::empty())?,
    };
    let resp = app.clone().call(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

pub async fn register(app: &Router, email: &str, password: &str) -> anyhow::Result<i32> {
    let body = serde_json::json!({
        "first_name": "Ola",
        "last_name": "Nordmann",
        "email": email,
        "phone_number": "12345678",
        "password": password,
    });
    let (status, id) = send(app, "POST", "/api/auth/register", None, Some(body)).await?;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", id);
    id.as_i64().map(|v| v as i32).ok_or_else(|| anyhow::anyhow!("register returned {}", id))
}

pub async fn login(app: &Router, email: &str, password: &str) -> anyhow::Result<String> {
    let body = serde_json::json!({ "email": email, "password": password });
    let (status, out) = send(app, "POST", "/api/auth/login", None, Some(body)).await?;
    assert_eq!(status, StatusCode::OK, "login failed: {}", out);
    out["token"].as_str().map(str::to_string).ok_or_else(|| anyhow::anyhow!("no token in {}", out))
}

pub async fn admin_token(app: &Router) -> anyhow::Result<String> {
    login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await
}

/// POST expecting 201 and return the created id.
pub async fn create(app: &Router, uri: &str, token: &str, body: Value) -> anyhow::Result<i32> {
    let (status, id) = send(app, "POST", uri, Some(token), Some(body)).await?;
    assert_eq!(status, StatusCode::CREATED, "POST {} failed: {}", uri, id);
    id.as_i64().map(|v| v as i32).ok_or_else(|| anyhow::anyhow!("POST {} returned {}", uri, id))
}
