mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{DatabaseSettings, LoggingSettings, ServerSettings, Settings, TransferSettings};
