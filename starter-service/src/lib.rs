pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

use crate::config::StarterConfig;
use crate::services::Clock;
use std::sync::Arc;

/// Shared application state, cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub config: StarterConfig,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: StarterConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }
}
