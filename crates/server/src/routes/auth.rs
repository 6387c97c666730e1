use std::sync::Arc;

use axum::{async_trait, extract::{FromRequestParts, State}, http::{header, request::Parts, HeaderMap, StatusCode}, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::warn;

use service::access::{self, authorize, Principal, Requirement};
use service::auth::{domain::{LoginInput, RegisterInput}, repo::seaorm::SeaOrmAuthRepository, service::{AuthConfig, AuthService}};

use crate::errors::ApiError;
use crate::extract::ApiJson;

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
}

impl ServerState {
    fn auth_service(&self) -> AuthService<SeaOrmAuthRepository> {
        let repo = Arc::new(SeaOrmAuthRepository { db: self.db.clone() });
        AuthService::new(repo, AuthConfig { jwt_secret: Some(self.auth.jwt_secret.clone()), token_ttl_hours: self.auth.token_ttl_hours })
    }
}

/// The caller behind the request, if any.
///
/// Resolved from `Authorization: Bearer <token>` or the `auth_token` cookie.
/// Missing, invalid or expired tokens resolve to `None`; the gate decides what that means.
pub struct CurrentUser(pub Option<Principal>);

impl CurrentUser {
    pub fn require(&self, requirement: Requirement) -> Result<&Principal, ApiError> {
        Ok(authorize(self.0.as_ref(), requirement)?)
    }
}

fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(h) = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        return h.strip_prefix("Bearer ").map(|t| t.trim().to_string());
    }
    CookieJar::from_headers(headers)
        .get(AUTH_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
}

#[async_trait]
impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        let Some(tok) = token_from_headers(&parts.headers) else { return Ok(CurrentUser(None)) };
        let user_id = match state.auth_service().verify_token(&tok) {
            Ok(id) => id,
            Err(e) => {
                warn!(path = %parts.uri.path(), err = %e, "token validation failed");
                return Ok(CurrentUser(None));
            }
        };
        let principal = access::load_principal(&state.db, user_id).await?;
        Ok(CurrentUser(principal))
    }
}

#[derive(Serialize)]
pub struct LoginOutput { pub user_id: i32, pub email: String, pub token: String }

pub async fn register(State(state): State<ServerState>, ApiJson(input): ApiJson<RegisterInput>) -> Result<(StatusCode, Json<i32>), ApiError> {
    let user = state.auth_service().register(input).await?;
    Ok((StatusCode::CREATED, Json(user.id)))
}

pub async fn login(State(state): State<ServerState>, jar: CookieJar, ApiJson(input): ApiJson<LoginInput>) -> Result<(CookieJar, Json<LoginOutput>), ApiError> {
    let session = state.auth_service().login(input).await?;
    let token = session.token.ok_or_else(|| ApiError::Internal("token generation failed".into()))?;
    let mut cookie = Cookie::new(AUTH_COOKIE, token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    let jar = jar.add(cookie);
    let out = LoginOutput { user_id: session.user.id, email: session.user.email, token };
    Ok((jar, Json(out)))
}

/// Always answers with an expired `auth_token`, whether or not the request carried one.
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    (jar.add(removal_cookie()), StatusCode::NO_CONTENT)
}

fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(AUTH_COOKIE, "");
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.make_removal();
    cookie
}

pub async fn me(user: CurrentUser) -> Result<Json<Principal>, ApiError> {
    user.0.map(Json).ok_or(ApiError::Unauthorized)
}
