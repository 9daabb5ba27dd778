use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &TracingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},tablecsv={level},tower_http=info,sqlx=warn",
            level = config.level
        ))
    });

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if config.json_format {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }

    tracing::debug!(
        environment = %config.environment,
        json_format = config.json_format,
        "Tracing initialized"
    );
}
