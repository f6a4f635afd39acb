//! Shared test fixtures for integration tests.

// Each integration test binary compiles this module separately and not all
// of them use every helper.
#![allow(dead_code)]

use std::time::Duration;

use denrei_server::{ServerConfig, run_server};

/// A relay server running in the background of the current test runtime.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Start a server on the given port with the default test capacity.
    pub fn start(port: u16) -> Self {
        Self::start_with_capacity(port, 64)
    }

    /// Start a server on the given port with a custom session capacity.
    pub fn start_with_capacity(port: u16, session_capacity: usize) -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
            session_capacity,
        };
        tokio::spawn(async move {
            if let Err(e) = run_server(config).await {
                eprintln!("Test server error: {e}");
            }
        });
        Self { port }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self, user: &str) -> String {
        format!("ws://127.0.0.1:{}/ws?user={}", self.port, user)
    }

    /// Poll the health endpoint until the server accepts requests.
    pub async fn wait_until_ready(&self) {
        let client = reqwest::Client::new();
        let url = format!("{}/api/health", self.base_url());
        for _ in 0..100 {
            if let Ok(response) = client.get(&url).send().await
                && response.status() == 200
            {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("Test server on port {} did not become ready", self.port);
    }

    /// Fetch `/api/sessions` as parsed JSON.
    pub async fn sessions(&self) -> serde_json::Value {
        let response = reqwest::get(format!("{}/api/sessions", self.base_url()))
            .await
            .expect("Failed to fetch sessions");
        response.json().await.expect("Failed to parse sessions JSON")
    }
}
