use std::time::Duration;

use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use tracing::{info, instrument, warn};

use crate::application::ports::TableStoreError;

const CONNECT_ATTEMPTS: u32 = 6;
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Opens the shared pool used by every job, backing off exponentially while
/// the server is unreachable.
#[instrument(skip(url))]
pub async fn create_pool(url: &str, max_connections: u32) -> Result<MySqlPool, TableStoreError> {
    let options = MySqlPoolOptions::new().max_connections(max_connections);
    let mut delay = INITIAL_BACKOFF;
    let mut attempt = 1;

    loop {
        match options.clone().connect(url).await {
            Ok(pool) => {
                info!(attempt, "MySQL connection pool established");
                return Ok(pool);
            }
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                warn!(
                    error = %e,
                    attempt,
                    delay_ms = delay.as_millis(),
                    "MySQL connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(e) => return Err(TableStoreError::ConnectionFailed(e.to_string())),
        }
    }
}
