#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;

use campus_connect_api::config::AppConfig;
use campus_connect_api::database::{Database, MemoryStore};

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    /// Backing store, for seeding and for checking what was persisted
    pub store: Arc<MemoryStore>,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a college and return its generated id
    pub async fn create_college(&self, body: Value) -> Result<String> {
        let res = self.client.post(self.url("/colleges")).json(&body).send().await?;
        anyhow::ensure!(res.status() == reqwest::StatusCode::CREATED, "create failed: {}", res.status());
        let payload = res.json::<Value>().await?;
        payload["collegeId"]
            .as_str()
            .map(str::to_string)
            .context("collegeId missing from create response")
    }
}

/// Serve the real router on an unused port, backed by a fresh in-memory
/// store so each test sees only its own documents.
pub async fn spawn_server() -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let store = Arc::new(MemoryStore::new());
    let db: Database = store.clone();
    let mut config = AppConfig::development();
    config.api.enable_request_logging = false;
    let app = campus_connect_api::routes::app(db, &config);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind {}", base_url))?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(TestServer {
        port,
        base_url,
        store,
        client: reqwest::Client::new(),
    })
}
