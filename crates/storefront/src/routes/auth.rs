//! Authentication route handlers.
//!
//! Register and login are stubs: they validate input shape and hand back a
//! synthetic user with a signed token.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{Result, set_sentry_user};
use crate::middleware::BearerUser;
use crate::models::SessionUser;
use crate::services::auth::AuthSession;
use crate::state::AppState;

/// Login request body. Fields are optional so that absence is reported as a
/// validation error rather than a malformed body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Register/login response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: SessionUser,
    pub token: String,
}

/// Current-user response.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: SessionUser,
}

fn respond(message: &str, session: AuthSession) -> Json<AuthResponse> {
    set_sentry_user(&session.user.id, Some(session.user.email.as_str()));

    Json(AuthResponse {
        message: message.to_string(),
        user: session.user,
        token: session.token,
    })
}

/// Log in. Any non-empty credentials are accepted.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    body: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>> {
    let Json(body) = body?;

    let session = state
        .auth()
        .login(body.email.as_deref(), body.password.as_deref())?;

    tracing::info!(user_id = %session.user.id, "Login successful");
    Ok(respond("Login successful", session))
}

/// Register a new user.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    body: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let Json(body) = body?;

    let session = state.auth().register(
        body.email.as_deref(),
        body.password.as_deref(),
        body.name.as_deref(),
    )?;

    tracing::info!(user_id = %session.user.id, "Registration successful");
    Ok((StatusCode::CREATED, respond("Registration successful", session)))
}

/// The user the bearer token was issued to.
pub async fn me(BearerUser(user): BearerUser) -> Json<MeResponse> {
    Json(MeResponse {
        success: true,
        user,
    })
}
