//! Integration tests for the product catalog API.

use reqwest::StatusCode;
use serde_json::{Value, json};

use vetaris_integration_tests::{admin_client, base_url, client, registered_client};

/// Create a product as admin and return its JSON.
async fn create_product(admin: &reqwest::Client, name: &str) -> Value {
    let base = base_url();
    let resp = admin
        .post(format!("{base}/api/products"))
        .json(&json!({"name": name, "price": "49.90", "category": "Takviye"}))
        .send()
        .await
        .expect("create product failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("invalid json")
}

#[tokio::test]
#[ignore = "Requires running server, PostgreSQL, and a seeded admin"]
async fn test_create_applies_defaults() {
    let admin = admin_client().await;
    let product = create_product(&admin, "Defaults Ürünü").await;

    assert_eq!(product["price"], json!("49.90"));
    assert_eq!(product["stock"], json!(0));
    assert_eq!(product["is_active"], json!(true));
    assert_eq!(product["image"], json!(""));
    assert!(product["id"].is_number());
}

#[tokio::test]
#[ignore = "Requires running server, PostgreSQL, and a seeded admin"]
async fn test_partial_update_touches_only_named_fields() {
    let admin = admin_client().await;
    let base = base_url();
    let product = create_product(&admin, "Patch Ürünü").await;
    let id = product["id"].as_i64().expect("missing id");

    let resp = admin
        .put(format!("{base}/api/products/{id}"))
        .json(&json!({"price": "59.90"}))
        .send()
        .await
        .expect("update failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = resp.json().await.expect("invalid json");
    assert_eq!(updated["price"], json!("59.90"));
    assert_eq!(updated["name"], product["name"]);
    assert_eq!(updated["category"], product["category"]);
}

#[tokio::test]
#[ignore = "Requires running server, PostgreSQL, and a seeded admin"]
async fn test_empty_patch_changes_nothing() {
    let admin = admin_client().await;
    let base = base_url();
    let product = create_product(&admin, "Boş Patch Ürünü").await;
    let id = product["id"].as_i64().expect("missing id");

    let resp = admin
        .put(format!("{base}/api/products/{id}"))
        .json(&json!({}))
        .send()
        .await
        .expect("update failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let unchanged: Value = resp.json().await.expect("invalid json");
    assert_eq!(unchanged, product);
}

#[tokio::test]
#[ignore = "Requires running server, PostgreSQL, and a seeded admin"]
async fn test_patch_with_unknown_field_is_400() {
    let admin = admin_client().await;
    let base = base_url();
    let product = create_product(&admin, "Sıkı Patch Ürünü").await;
    let id = product["id"].as_i64().expect("missing id");

    // Field names outside the allow-list must be rejected outright; this
    // one in particular must never reach a query.
    let resp = admin
        .put(format!("{base}/api/products/{id}"))
        .json(&json!({"is_admin": true}))
        .send()
        .await
        .expect("update failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server, PostgreSQL, and a seeded admin"]
async fn test_soft_delete_hides_from_default_listing() {
    let admin = admin_client().await;
    let base = base_url();
    let product = create_product(&admin, "Silinecek Ürün").await;
    let id = product["id"].as_i64().expect("missing id");

    let resp = admin
        .delete(format!("{base}/api/products/{id}"))
        .send()
        .await
        .expect("delete failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let listed: Vec<Value> = client()
        .get(format!("{base}/api/products"))
        .send()
        .await
        .expect("list failed")
        .json()
        .await
        .expect("invalid json");
    assert!(listed.iter().all(|p| p["id"].as_i64() != Some(id)));

    let all: Vec<Value> = client()
        .get(format!("{base}/api/products?include_inactive=true"))
        .send()
        .await
        .expect("list failed")
        .json()
        .await
        .expect("invalid json");
    let found = all
        .iter()
        .find(|p| p["id"].as_i64() == Some(id))
        .expect("soft-deleted product missing from full listing");
    assert_eq!(found["is_active"], json!(false));

    // Still addressable directly, so historical order items can resolve it.
    let resp = client()
        .get(format!("{base}/api/products/{id}"))
        .send()
        .await
        .expect("get failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let direct: Value = resp.json().await.expect("invalid json");
    assert_eq!(direct["is_active"], json!(false));
}

#[tokio::test]
#[ignore = "Requires running server, PostgreSQL, and a seeded admin"]
async fn test_non_admin_writes_are_403() {
    let (user, _) = registered_client("nonadmin-products").await;
    let base = base_url();

    let attempts = [
        user.post(format!("{base}/api/products"))
            .json(&json!({"name": "X", "price": 1})),
        user.put(format!("{base}/api/products/1"))
            .json(&json!({"price": 1})),
        user.delete(format!("{base}/api/products/1")),
    ];

    for attempt in attempts {
        let resp = attempt.send().await.expect("request failed");
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
#[ignore = "Requires running server, PostgreSQL, and a seeded admin"]
async fn test_negative_price_is_400() {
    let admin = admin_client().await;
    let base = base_url();

    let resp = admin
        .post(format!("{base}/api/products"))
        .json(&json!({"name": "Negatif", "price": "-1.00"}))
        .send()
        .await
        .expect("create failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
