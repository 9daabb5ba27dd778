use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        Self {
            environment: environment.to_string(),
            level: logging.level.clone(),
            json_format: logging.enable_json,
        }
    }
}
