use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Port number for the HTTP service
    #[arg(long)]
    pub port: Option<u16>,

    /// Database connection URL with credentials
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub dburl: Option<String>,

    /// Run a single transfer and exit instead of starting the service
    #[arg(long, value_enum)]
    pub action: Option<Action>,

    /// Table name to import into or export from
    #[arg(long)]
    pub table: Option<String>,

    /// File name to import, relative to the import directory
    #[arg(long)]
    pub file: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Import,
    Export,
}

/// A one-shot transfer requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliJob {
    Export { table: String },
    Import { table: String, file: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    #[error("insufficient parameters: {0}")]
    InsufficientParameters(&'static str),
}

impl CliArgs {
    /// `None` means no action was given and the HTTP service should start.
    pub fn job(&self) -> Result<Option<CliJob>, CliError> {
        let Some(action) = self.action else {
            return Ok(None);
        };

        let table = non_empty(&self.table);
        match action {
            Action::Export => {
                let table = table.ok_or(CliError::InsufficientParameters(
                    "export requires --table",
                ))?;
                Ok(Some(CliJob::Export { table }))
            }
            Action::Import => match (table, non_empty(&self.file)) {
                (Some(table), Some(file)) => Ok(Some(CliJob::Import { table, file })),
                _ => Err(CliError::InsufficientParameters(
                    "import requires --table and --file",
                )),
            },
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
