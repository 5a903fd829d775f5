//! Session cookie helpers.
//!
//! The session token travels in a single cookie scoped to the root path and
//! marked HTTP-only, so page scripts can't read it. It is the only place the
//! token appears outside the database.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use cookie::Cookie;
use cookie::time::Duration;

use vetaris_core::SessionToken;

use crate::models::session::SESSION_TTL_DAYS;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "vetaris_session";

/// Build the login cookie carrying a freshly minted token.
///
/// Max-Age matches the session row's 30-day TTL, so browser and store agree
/// on the lifetime.
#[must_use]
pub fn session_cookie(token: &SessionToken) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token.as_str().to_owned()))
        .http_only(true)
        .path("/")
        .max_age(Duration::days(SESSION_TTL_DAYS))
        .build()
}

/// Build the logout cookie: empty value, immediate expiry.
#[must_use]
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, ""))
        .http_only(true)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}

/// Extract the session token from the request's `Cookie` headers, if any.
#[must_use]
pub fn token_from_headers(headers: &HeaderMap) -> Option<SessionToken> {
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else { continue };

        for cookie in Cookie::split_parse(raw).flatten() {
            if cookie.name() == SESSION_COOKIE_NAME && !cookie.value().is_empty() {
                return Some(SessionToken::new(cookie.value().to_owned()));
            }
        }
    }

    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie(&SessionToken::new("tok123"));
        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "tok123");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(30)));
    }

    #[test]
    fn test_expired_cookie_clears_value() {
        let cookie = expired_session_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }

    #[test]
    fn test_token_extracted_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; vetaris_session=abc; lang=tr"),
        );
        let token = token_from_headers(&headers).unwrap();
        assert_eq!(token.as_str(), "abc");
    }

    #[test]
    fn test_missing_cookie_yields_none() {
        let headers = HeaderMap::new();
        assert!(token_from_headers(&headers).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert!(token_from_headers(&headers).is_none());
    }

    #[test]
    fn test_empty_session_value_yields_none() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("vetaris_session="));
        assert!(token_from_headers(&headers).is_none());
    }
}
