//! Unified API error handling.
//!
//! Provides the `ApiError` type that every route handler returns. Errors are
//! serialized as `{"error": <message>}` JSON bodies with the matching HTTP
//! status; storage failures are logged server-side with full detail but the
//! client only ever sees a generic message.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// No session, or the session is expired/invalid.
    #[error("authentication required")]
    Unauthenticated,

    /// Valid session, insufficient privilege.
    #[error("admin privileges required")]
    Unauthorized,

    /// Unknown id or slug.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Duplicate unique key.
    #[error("{0}")]
    Conflict(String),

    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] RepositoryError),
}

/// Wire shape of every error body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Unauthenticated => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::Unauthorized => (StatusCode::FORBIDDEN, self.to_string()),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            Self::Auth(err) => auth_status_and_message(err),
            Self::Database(err) => repository_status_and_message(err),
        }
    }
}

fn auth_status_and_message(err: &AuthError) -> (StatusCode, String) {
    match err {
        AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, err.to_string()),
        AuthError::UserAlreadyExists => (StatusCode::CONFLICT, err.to_string()),
        AuthError::InvalidEmail(_) | AuthError::WeakPassword(_) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        AuthError::PasswordHash => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_owned(),
        ),
        AuthError::Repository(repo_err) => repository_status_and_message(repo_err),
    }
}

fn repository_status_and_message(err: &RepositoryError) -> (StatusCode, String) {
    match err {
        RepositoryError::NotFound(resource) => {
            (StatusCode::NOT_FOUND, format!("{resource} not found"))
        }
        RepositoryError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
        RepositoryError::Database(_) | RepositoryError::DataCorruption(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_owned(),
        ),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        // Full detail stays in the server log; the client gets the mapped message.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

/// JSON body extractor whose rejection is an [`ApiError`].
///
/// Malformed or missing bodies become a 400 `{"error": ...}` response before
/// the handler runs.
#[derive(axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes_follow_taxonomy() {
        assert_eq!(
            get_status(ApiError::Validation("bad input".to_owned())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::Unauthenticated),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(get_status(ApiError::Unauthorized), StatusCode::FORBIDDEN);
        assert_eq!(get_status(ApiError::NotFound("product")), StatusCode::NOT_FOUND);
        assert_eq!(
            get_status(ApiError::Conflict("email already registered".to_owned())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        let err = ApiError::Database(RepositoryError::NotFound("order"));
        assert_eq!(get_status(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_failure_hides_detail() {
        let err = ApiError::Database(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "internal server error");
    }

    #[test]
    fn test_invalid_credentials_maps_to_401() {
        let err = ApiError::Auth(AuthError::InvalidCredentials);
        assert_eq!(get_status(err), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_duplicate_email_maps_to_409() {
        let err = ApiError::Auth(AuthError::UserAlreadyExists);
        assert_eq!(get_status(err), StatusCode::CONFLICT);
    }
}
