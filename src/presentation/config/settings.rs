use std::path::PathBuf;

use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::presentation::cli::CliArgs;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub transfer: TransferSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferSettings {
    /// Where dump files are written.
    pub export_dir: String,
    /// Where import files are looked up; the executable's directory if unset.
    pub import_dir: Option<String>,
    pub insert_batch_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.<env>` (optional), then `APP_*` variables
    /// with `__` between nested keys, e.g. `APP_DATABASE__URL`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.max_connections", 10)?
            .set_default("transfer.export_dir", ".")?
            .set_default("transfer.insert_batch_size", 500)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Command-line flags take precedence over every other source.
    pub fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.port = port;
        }
        if let Some(url) = args.dburl.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            self.database.url = Some(url.to_string());
        }
    }

    pub fn export_dir(&self) -> PathBuf {
        PathBuf::from(&self.transfer.export_dir)
    }

    pub fn import_dir(&self) -> Option<PathBuf> {
        self.transfer.import_dir.as_ref().map(PathBuf::from)
    }
}
