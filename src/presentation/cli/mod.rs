mod args;
mod prompt;
mod run;

pub use args::{Action, CliArgs, CliError, CliJob};
pub use prompt::prompt_database_url;
pub use run::run_cli_job;
