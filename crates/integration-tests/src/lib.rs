//! Integration tests for Shopdesk.
//!
//! Each test spawns the real router on an ephemeral port, backed by its own
//! in-memory SQLite database, and talks to it over HTTP with `reqwest`. No
//! external services are required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopdesk-integration-tests
//! ```

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tokio::task::JoinHandle;

use shopdesk_server::db;
use shopdesk_server::state::AppState;

/// A running server instance with a private database.
///
/// The server task is aborted when this value is dropped, along with any
/// temporary database directory.
pub struct TestServer {
    base_url: String,
    client: Client,
    handle: JoinHandle<()>,
    _db_dir: Option<TempDir>,
}

impl TestServer {
    /// Start a server on `127.0.0.1` with a freshly migrated in-memory database.
    ///
    /// # Panics
    ///
    /// Panics if the database cannot be created or the port cannot be bound.
    pub async fn spawn() -> Self {
        let pool = db::create_in_memory_pool()
            .await
            .expect("Failed to open in-memory database");
        Self::serve(pool, None).await
    }

    /// Start a server backed by a database file in a temporary directory.
    ///
    /// The pool holds `max_connections` connections, so concurrent requests
    /// run on separate SQLite connections.
    ///
    /// # Panics
    ///
    /// Panics if the database cannot be created or the port cannot be bound.
    pub async fn spawn_with_file_db(max_connections: u32) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("shopdesk.db").display());
        let pool = db::create_pool(&url.into(), max_connections)
            .await
            .expect("Failed to open database file");
        Self::serve(pool, Some(dir)).await
    }

    async fn serve(pool: SqlitePool, db_dir: Option<TempDir>) -> Self {
        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let app = shopdesk_server::app(AppState::new(pool));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: Client::new(),
            handle,
            _db_dir: db_dir,
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and decode the JSON response body.
    ///
    /// Returns `Value::Null` when the body is not JSON.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> (StatusCode, Value) {
        let mut builder = self.client.request(method, self.url(path));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.expect("Failed to send request");
        let status = response.status();
        let json = response.json::<Value>().await.unwrap_or(Value::Null);
        (status, json)
    }

    /// `GET` a path.
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request(Method::GET, path, None).await
    }

    /// `POST` a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        self.request(Method::POST, path, Some(body)).await
    }

    /// `PUT` a JSON body.
    pub async fn put(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// `DELETE` a path.
    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, path, None).await
    }

    /// The underlying HTTP client, for requests the helpers don't cover.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
