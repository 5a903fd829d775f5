//! Integration tests for the order API.

use reqwest::StatusCode;
use serde_json::{Value, json};

use vetaris_integration_tests::{admin_client, base_url, registered_client};

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_order_persists_as_one_unit_with_nested_items() {
    let (user, _) = registered_client("order-unit").await;
    let base = base_url();

    let resp = user
        .post(format!("{base}/api/orders"))
        .json(&json!({
            "items": [{"id": 1, "name": "A", "price": 10, "quantity": 2}],
            "total": 20
        }))
        .send()
        .await
        .expect("create order failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.expect("invalid json");
    let order_id = created["order_id"].as_i64().expect("missing order_id");

    let orders: Vec<Value> = user
        .get(format!("{base}/api/orders"))
        .send()
        .await
        .expect("list orders failed")
        .json()
        .await
        .expect("invalid json");

    let order = orders
        .iter()
        .find(|o| o["id"].as_i64() == Some(order_id))
        .expect("created order missing from listing");

    assert_eq!(order["total_amount"], json!("20.00"));
    assert_eq!(order["status"], json!("Preparing"));
    let items = order["items"].as_array().expect("items not nested");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["product_name"], json!("A"));
    assert_eq!(items[0]["quantity"], json!(2));
    assert_eq!(items[0]["price_at_purchase"], json!("10.00"));
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_empty_cart_is_400() {
    let (user, _) = registered_client("order-empty").await;
    let base = base_url();

    let resp = user
        .post(format!("{base}/api/orders"))
        .json(&json!({"items": [], "total": 0}))
        .send()
        .await
        .expect("create order failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_orders_are_scoped_to_their_owner() {
    let (buyer, _) = registered_client("order-owner").await;
    let (other, _) = registered_client("order-other").await;
    let base = base_url();

    let resp = buyer
        .post(format!("{base}/api/orders"))
        .json(&json!({
            "items": [{"id": 2, "name": "B", "price": "5.50", "quantity": 1}],
            "total": "5.50"
        }))
        .send()
        .await
        .expect("create order failed");
    let created: Value = resp.json().await.expect("invalid json");
    let order_id = created["order_id"].as_i64().expect("missing order_id");

    let others_orders: Vec<Value> = other
        .get(format!("{base}/api/orders"))
        .send()
        .await
        .expect("list orders failed")
        .json()
        .await
        .expect("invalid json");

    assert!(
        others_orders
            .iter()
            .all(|o| o["id"].as_i64() != Some(order_id))
    );
}

#[tokio::test]
#[ignore = "Requires running server, PostgreSQL, and a seeded admin"]
async fn test_admin_listing_includes_buyer_email_and_items() {
    let (buyer, email) = registered_client("order-admin-list").await;
    let base = base_url();

    buyer
        .post(format!("{base}/api/orders"))
        .json(&json!({
            "items": [{"id": 3, "name": "C", "price": 1, "quantity": 1}],
            "total": 1
        }))
        .send()
        .await
        .expect("create order failed");

    let admin = admin_client().await;
    let orders: Vec<Value> = admin
        .get(format!("{base}/api/admin/orders"))
        .send()
        .await
        .expect("admin list failed")
        .json()
        .await
        .expect("invalid json");

    let order = orders
        .iter()
        .find(|o| o["user_email"] == json!(email))
        .expect("buyer's order missing from admin listing");
    assert!(order["items"].as_array().is_some_and(|i| !i.is_empty()));
}

#[tokio::test]
#[ignore = "Requires running server, PostgreSQL, and a seeded admin"]
async fn test_status_update_round_trips() {
    let (buyer, _) = registered_client("order-status").await;
    let base = base_url();

    let resp = buyer
        .post(format!("{base}/api/orders"))
        .json(&json!({
            "items": [{"id": 4, "name": "D", "price": 2, "quantity": 1}],
            "total": 2
        }))
        .send()
        .await
        .expect("create order failed");
    let created: Value = resp.json().await.expect("invalid json");
    let order_id = created["order_id"].as_i64().expect("missing order_id");

    let admin = admin_client().await;
    let resp = admin
        .put(format!("{base}/api/admin/orders/{order_id}/status"))
        .json(&json!({"status": "Shipped"}))
        .send()
        .await
        .expect("status update failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = resp.json().await.expect("invalid json");
    assert_eq!(updated["status"], json!("Shipped"));
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_non_admin_is_403_on_every_admin_route() {
    let (user, _) = registered_client("order-nonadmin").await;
    let base = base_url();

    let attempts = [
        user.get(format!("{base}/api/admin/orders")),
        user.put(format!("{base}/api/admin/orders/1/status"))
            .json(&json!({"status": "Shipped"})),
        user.get(format!("{base}/api/admin/posts")),
    ];

    for attempt in attempts {
        let resp = attempt.send().await.expect("request failed");
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
#[ignore = "Requires running server, PostgreSQL, and a seeded admin"]
async fn test_item_snapshots_survive_product_edits() {
    let admin = admin_client().await;
    let base = base_url();

    // Create a product, order it, then change its name and price.
    let resp = admin
        .post(format!("{base}/api/products"))
        .json(&json!({"name": "Snapshot Ürünü", "price": "30.00"}))
        .send()
        .await
        .expect("create product failed");
    let product: Value = resp.json().await.expect("invalid json");
    let product_id = product["id"].as_i64().expect("missing id");

    let (buyer, _) = registered_client("order-snapshot").await;
    buyer
        .post(format!("{base}/api/orders"))
        .json(&json!({
            "items": [{"id": product_id, "name": "Snapshot Ürünü", "price": "30.00", "quantity": 1}],
            "total": "30.00"
        }))
        .send()
        .await
        .expect("create order failed");

    admin
        .put(format!("{base}/api/products/{product_id}"))
        .json(&json!({"name": "Yeni İsim", "price": "99.00"}))
        .send()
        .await
        .expect("product update failed");

    let orders: Vec<Value> = buyer
        .get(format!("{base}/api/orders"))
        .send()
        .await
        .expect("list orders failed")
        .json()
        .await
        .expect("invalid json");

    let item = &orders[0]["items"][0];
    assert_eq!(item["product_name"], json!("Snapshot Ürünü"));
    assert_eq!(item["price_at_purchase"], json!("30.00"));
}
