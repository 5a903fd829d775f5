//! Integration tests for the authentication flow.
//!
//! These tests require a running server and `PostgreSQL`; see the crate
//! docs for setup. Run with `cargo test -- --ignored`.

use reqwest::StatusCode;
use serde_json::{Value, json};

use vetaris_integration_tests::{base_url, client, registered_client, unique_email};

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_register_then_login_then_me_roundtrip() {
    let (client, email) = registered_client("roundtrip").await;
    let base = base_url();

    let resp = client
        .get(format!("{base}/api/auth/me"))
        .send()
        .await
        .expect("me request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("invalid json");
    assert_eq!(body["authenticated"], json!(true));
    assert_eq!(body["email"], json!(email));
    assert_eq!(body["is_admin"], json!(false));
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_duplicate_register_is_409() {
    let base = base_url();
    let email = unique_email("duplicate");

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let resp = client()
            .post(format!("{base}/api/auth/register"))
            .json(&json!({"email": email, "password": "integration-pass"}))
            .send()
            .await
            .expect("register request failed");
        assert_eq!(resp.status(), expected);
    }
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_wrong_password_is_401_with_generic_error() {
    let (_, email) = registered_client("wrongpass").await;
    let base = base_url();

    let resp = client()
        .post(format!("{base}/api/auth/login"))
        .json(&json!({"email": email, "password": "not-the-password"}))
        .send()
        .await
        .expect("login request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("invalid json");
    assert_eq!(body["error"], json!("invalid credentials"));
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_unknown_email_gets_same_error_as_wrong_password() {
    let base = base_url();

    let resp = client()
        .post(format!("{base}/api/auth/login"))
        .json(&json!({"email": unique_email("ghost"), "password": "whatever-pass"}))
        .send()
        .await
        .expect("login request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("invalid json");
    assert_eq!(body["error"], json!("invalid credentials"));
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_logout_invalidates_session() {
    let (client, _) = registered_client("logout").await;
    let base = base_url();

    let resp = client
        .post(format!("{base}/api/auth/logout"))
        .send()
        .await
        .expect("logout request failed");
    assert!(resp.status().is_success());

    // The same client (and whatever cookie state remains) must now be
    // rejected: the session row is gone.
    let resp = client
        .get(format!("{base}/api/auth/me"))
        .send()
        .await
        .expect("me request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_logout_without_session_is_idempotent() {
    let base = base_url();

    let resp = client()
        .post(format!("{base}/api/auth/logout"))
        .send()
        .await
        .expect("logout request failed");

    assert!(resp.status().is_success());
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_concurrent_sessions_are_independent() {
    let (first, email) = registered_client("concurrent").await;
    let base = base_url();

    // Second login from a separate client mints a separate session.
    let second = client();
    let resp = second
        .post(format!("{base}/api/auth/login"))
        .json(&json!({"email": email, "password": "integration-pass"}))
        .send()
        .await
        .expect("second login failed");
    assert!(resp.status().is_success());

    // Logging out the second session leaves the first one alive.
    second
        .post(format!("{base}/api/auth/logout"))
        .send()
        .await
        .expect("logout failed");

    let resp = first
        .get(format!("{base}/api/auth/me"))
        .send()
        .await
        .expect("me request failed");
    assert_eq!(resp.status(), StatusCode::OK);
}
