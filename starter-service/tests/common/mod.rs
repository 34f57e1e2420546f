#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use chrono::{DateTime, Local, TimeZone};
use service_core::config::Config as CoreConfig;
use starter_service::config::StarterConfig;
use starter_service::services::{Clock, FixedClock, SystemClock};
use starter_service::startup::{build_router, Application};
use starter_service::AppState;
use std::sync::Arc;

/// 2024-03-15 10:30:00 local time, used wherever a test needs exact output.
pub fn fixed_instant() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 15, 10, 30, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(fixed_instant()))
}

pub fn test_config() -> StarterConfig {
    StarterConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        ..StarterConfig::default()
    }
}

pub fn router_with_clock(clock: Arc<dyn Clock>) -> axum::Router {
    build_router(AppState::new(test_config(), clock))
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .expect("Failed to build request")
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    client: reqwest::Client,
}

impl TestApp {
    /// Spawn the real server on a random port with the system clock.
    pub async fn spawn() -> Self {
        Self::spawn_with_clock(Arc::new(SystemClock)).await
    }

    pub async fn spawn_with_clock(clock: Arc<dyn Clock>) -> Self {
        let app = Application::build(test_config(), clock)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}
