//! Request middleware: session cookie plumbing and auth policy extractors.

pub mod auth;
pub mod session;

pub use auth::{RequireAdmin, RequireSession};
pub use session::{SESSION_COOKIE_NAME, expired_session_cookie, session_cookie};
