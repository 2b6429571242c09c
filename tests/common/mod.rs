//! Shared helpers: temporary SQLite database + in-process API server on an ephemeral port.

#![allow(dead_code)]

use driver_service::infra::config::{BasicAuthCredentials, DatabaseConfig};
use driver_service::transport;
use driver_service::{BasicAuthenticator, DriverService, DriverStore, SqliteDriverStore};
use std::sync::Arc;
use tempfile::TempDir;

pub const USERNAME: &str = "fleet-admin";
pub const PASSWORD: &str = "s3cret:pass";

pub fn database_config(dir: &TempDir) -> DatabaseConfig {
    DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("drivers.db").display()),
        max_connections: 5,
    }
}

pub fn credentials() -> BasicAuthCredentials {
    BasicAuthCredentials {
        username: USERNAME.to_string(),
        password: PASSWORD.to_string(),
    }
}

pub async fn sqlite_store(dir: &TempDir) -> SqliteDriverStore {
    SqliteDriverStore::connect(&database_config(dir))
        .await
        .expect("open sqlite store")
}

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    server: tokio::task::JoinHandle<()>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path)).basic_auth(USERNAME, Some(PASSWORD))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path)).basic_auth(USERNAME, Some(PASSWORD))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path)).basic_auth(USERNAME, Some(PASSWORD))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path)).basic_auth(USERNAME, Some(PASSWORD))
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Serves the router over `store` on 127.0.0.1 with an OS-assigned port.
pub async fn spawn_app(store: Arc<dyn DriverStore>) -> TestApp {
    let app_state = transport::http::AppState::new(
        DriverService::new(store),
        BasicAuthenticator::new(credentials()),
    );
    let router = transport::http::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp {
        base_url: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
        server,
    }
}

/// Same as [`spawn_app`] over a fresh SQLite file. Keep the `TempDir` alive for the test.
pub async fn spawn_sqlite_app() -> (TestApp, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = sqlite_store(&dir).await;
    (spawn_app(Arc::new(store)).await, dir)
}
