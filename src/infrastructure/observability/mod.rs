mod database_url;
mod init_tracing;
mod tracing_config;

pub use database_url::redact_database_url;
pub use init_tracing::init_tracing;
pub use tracing_config::TracingConfig;
