//! Authentication route handlers.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use vetaris_core::{Email, UserId};

use crate::error::{ApiJson, Result};
use crate::middleware::auth::RequireSession;
use crate::middleware::session::{expired_session_cookie, session_cookie, token_from_headers};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Credentials for registration and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Response for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: UserId,
    pub email: Email,
}

/// Response for login/logout.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Response for the current identity.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub authenticated: bool,
    pub user_id: UserId,
    pub email: Email,
    pub is_admin: bool,
}

/// Create a new account.
///
/// POST /api/auth/register
///
/// # Errors
///
/// 400 for invalid email or weak password, 409 for a duplicate email.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CredentialsRequest>,
) -> Result<impl IntoResponse> {
    let user = AuthService::new(state.pool())
        .register(&body.email, &body.password)
        .await?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: user.id,
            email: user.email,
        }),
    ))
}

/// Verify credentials and set the session cookie.
///
/// POST /api/auth/login
///
/// # Errors
///
/// 401 with a generic message for unknown email or wrong password.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CredentialsRequest>,
) -> Result<impl IntoResponse> {
    let token = AuthService::new(state.pool())
        .login(&body.email, &body.password)
        .await?;

    let cookie = session_cookie(&token);

    Ok((
        [(SET_COOKIE, cookie.to_string())],
        Json(SuccessResponse { success: true }),
    ))
}

/// Delete the caller's session and clear the cookie.
///
/// POST /api/auth/logout
///
/// Idempotent: succeeds with or without a live session.
///
/// # Errors
///
/// 500 only if the session delete itself fails.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    if let Some(token) = token_from_headers(&headers) {
        AuthService::new(state.pool()).logout(&token).await?;
    }

    let cookie = expired_session_cookie();

    Ok((
        [(SET_COOKIE, cookie.to_string())],
        Json(SuccessResponse { success: true }),
    ))
}

/// Return the authenticated identity.
///
/// GET /api/auth/me
///
/// # Errors
///
/// 401 when the session cookie is missing, unknown, or expired.
pub async fn me(RequireSession(user): RequireSession) -> Json<MeResponse> {
    Json(MeResponse {
        authenticated: true,
        user_id: user.user_id,
        email: user.email,
        is_admin: user.is_admin,
    })
}
