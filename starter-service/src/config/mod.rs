use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct StarterConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Verbose error reporting: panic messages are returned to the caller.
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector endpoint. Spans are only exported when set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_service_name() -> String {
    "starter-service".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StarterConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            service_name: default_service_name(),
            debug: false,
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

impl StarterConfig {
    /// Load from the optional `configuration` file and `APP_*` environment
    /// variables (`APP_PORT`, `APP_DEBUG`, `APP_OTLP_ENDPOINT`, ...).
    pub fn load() -> Result<Self, AppError> {
        let config = core_config::builder().build()?;
        Ok(config.try_deserialize()?)
    }
}
