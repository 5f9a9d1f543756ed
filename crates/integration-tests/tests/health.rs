//! Operational endpoint tests.

use reqwest::StatusCode;

use shopdesk_integration_tests::TestServer;

#[tokio::test]
async fn test_liveness() {
    let server = TestServer::spawn().await;

    let response = server
        .client()
        .get(server.url("/health"))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.expect("body"), "ok");
}

#[tokio::test]
async fn test_readiness() {
    let server = TestServer::spawn().await;
    assert_eq!(server.get("/health/ready").await.0, StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_echoed() {
    let server = TestServer::spawn().await;

    let response = server
        .client()
        .get(server.url("/users/"))
        .header("x-request-id", "req-123")
        .send()
        .await
        .expect("request failed");

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("req-123")
    );
}

#[tokio::test]
async fn test_request_id_generated() {
    let server = TestServer::spawn().await;

    let response = server
        .client()
        .get(server.url("/products/"))
        .send()
        .await
        .expect("request failed");

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_generated_request_id_visible_to_handlers() {
    use axum::{Router, http::HeaderMap, routing::get};
    use shopdesk_server::middleware::{REQUEST_ID_HEADER, request_id_middleware};

    async fn echo_request_id(headers: HeaderMap) -> String {
        headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    let app = Router::new()
        .route("/echo", get(echo_request_id))
        .layer(axum::middleware::from_fn(request_id_middleware));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    let response = reqwest::get(format!("http://{addr}/echo"))
        .await
        .expect("request failed");
    let header = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .expect("missing x-request-id");
    let body = response.text().await.expect("body");
    handle.abort();

    assert_eq!(body, header);
    assert_eq!(header.len(), 36);
}
