//! Response bodies. Every handler answers with one of these JSON objects.

use serde::Serialize;
use serde_json::Value;

pub const WELCOME_MESSAGE: &str = "Welcome to Rust API starter!";
pub const HEALTHY: &str = "healthy";

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

/// Logical endpoint name to path (and method, where it is not GET).
#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub hello: &'static str,
    pub echo: &'static str,
}

impl Default for IndexResponse {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE,
            endpoints: Endpoints {
                health: "/health",
                hello: "/hello/{name}",
                echo: "/echo (POST)",
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: String,
}

impl GreetingResponse {
    pub fn for_name(name: &str) -> Self {
        Self {
            message: format!("Hello, {}!", name),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub received: Value,
    pub timestamp: String,
}
