pub mod cli;
pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use cli::{Action, CliArgs, CliError, CliJob};
pub use config::{Environment, Settings};
pub use router::create_router;
pub use state::AppState;
