//! Authentication extractors.
//!
//! Each route declares its policy by taking one of these extractors as an
//! argument; the policy runs before the handler body, against the store, on
//! every request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::models::CurrentUser;
use crate::services::auth::AuthService;
use crate::state::AppState;

use super::session::token_from_headers;

/// Extractor for `RequiresSession` routes.
///
/// Rejects with 401 when the session cookie is missing, unknown, or
/// expired.
///
/// # Example
///
/// ```rust,ignore
/// async fn my_orders(
///     RequireSession(user): RequireSession,
///     State(state): State<AppState>,
/// ) -> Result<Json<Vec<OrderWithItems>>> { /* ... */ }
/// ```
pub struct RequireSession(pub CurrentUser);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers).ok_or(ApiError::Unauthenticated)?;

        let user = AuthService::new(state.pool())
            .authenticate(&token)
            .await?
            .ok_or(ApiError::Unauthenticated)?;

        Ok(Self(user))
    }
}

/// Extractor for `RequiresAdmin` routes.
///
/// Same as [`RequireSession`], plus a 403 when the authenticated identity
/// lacks the admin flag.
pub struct RequireAdmin(pub CurrentUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireSession(user) = RequireSession::from_request_parts(parts, state).await?;

        if !user.is_admin {
            return Err(ApiError::Unauthorized);
        }

        Ok(Self(user))
    }
}

