//! End-to-end tests for the `/orders/` endpoints.

use reqwest::StatusCode;
use serde_json::{Value, json};

use shopdesk_integration_tests::TestServer;

fn order(user_id: i64, product_id: i64, status: &str) -> Value {
    json!({
        "user_id": user_id,
        "product_id": product_id,
        "order_date": "2024-03-01",
        "status": status
    })
}

#[tokio::test]
async fn test_order_with_unknown_user_is_accepted() {
    let server = TestServer::spawn().await;

    let (status, created) = server.post("/orders/", &order(999, 1, "new")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        created,
        json!({"id": 1, "user_id": 999, "product_id": 1, "order_date": "2024-03-01", "status": "new"})
    );
}

#[tokio::test]
async fn test_order_lifecycle() {
    let server = TestServer::spawn().await;
    server
        .post(
            "/users/",
            &json!({"first_name": "A", "last_name": "B", "email": "a@b.com", "password": "x"}),
        )
        .await;
    server
        .post("/products/", &json!({"name": "Lamp", "description": "d", "price": 5}))
        .await;

    let (_, created) = server.post("/orders/", &order(1, 1, "new")).await;
    let (status, updated) = server.put("/orders/1/", &order(1, 1, "shipped")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["status"], json!("shipped"));

    let (_, deleted) = server.delete("/orders/1/").await;
    assert_eq!(deleted, updated);

    let (status, body) = server.get("/orders/1/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Order not found"}));
}

#[tokio::test]
async fn test_deleting_user_keeps_orders() {
    let server = TestServer::spawn().await;
    server
        .post(
            "/users/",
            &json!({"first_name": "A", "last_name": "B", "email": "a@b.com", "password": "x"}),
        )
        .await;
    server.post("/orders/", &order(1, 1, "new")).await;

    assert_eq!(server.delete("/users/1/").await.0, StatusCode::OK);

    let (status, listed) = server.get("/orders/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_concurrent_deletes_single_winner() {
    let server = TestServer::spawn().await;
    server.post("/orders/", &order(1, 1, "new")).await;

    let (first, second) = tokio::join!(server.delete("/orders/1/"), server.delete("/orders/1/"));

    let mut statuses = [first.0, second.0];
    statuses.sort_by_key(StatusCode::as_u16);
    assert_eq!(statuses, [StatusCode::OK, StatusCode::NOT_FOUND]);
}

#[tokio::test]
async fn test_created_order_is_fetchable() {
    let server = TestServer::spawn().await;
    let input = order(3, 7, "pending");

    let (status, created) = server.post("/orders/", &input).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["user_id"], input["user_id"]);
    assert_eq!(created["product_id"], input["product_id"]);
    assert_eq!(created["order_date"], input["order_date"]);
    assert_eq!(created["status"], input["status"]);

    let (status, fetched) = server.get("/orders/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let server = TestServer::spawn().await;
    let not_found = json!({"detail": "Order not found"});

    assert_eq!(
        server.get("/orders/9/").await,
        (StatusCode::NOT_FOUND, not_found.clone())
    );
    assert_eq!(
        server.put("/orders/9/", &order(1, 1, "shipped")).await,
        (StatusCode::NOT_FOUND, not_found.clone())
    );
    assert_eq!(
        server.delete("/orders/9/").await,
        (StatusCode::NOT_FOUND, not_found)
    );

    let (_, listed) = server.get("/orders/").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deletes_on_pooled_file_db() {
    let server = TestServer::spawn_with_file_db(4).await;
    server.post("/orders/", &order(1, 1, "new")).await;

    let deletes: Vec<_> = (0..8)
        .map(|_| {
            let request = server.client().delete(server.url("/orders/1/"));
            tokio::spawn(async move { request.send().await.expect("request failed").status() })
        })
        .collect();

    let mut statuses = Vec::new();
    for delete in deletes {
        statuses.push(delete.await.expect("task panicked"));
    }

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert_eq!(
        statuses
            .iter()
            .filter(|s| **s == StatusCode::NOT_FOUND)
            .count(),
        7
    );
}
