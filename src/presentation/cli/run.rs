use crate::application::services::{JobError, JobExecutor, JobOutcome, generate_dump_filename};
use crate::presentation::cli::CliJob;

/// Runs a command-line job to completion. Returns the file involved with the
/// outcome so the caller can report it.
pub async fn run_cli_job(
    executor: &JobExecutor,
    job: CliJob,
) -> Result<(String, JobOutcome), JobError> {
    match job {
        CliJob::Export { table } => {
            let filename = generate_dump_filename();
            let outcome = executor.dump(&table, &filename).await?;
            Ok((filename, outcome))
        }
        CliJob::Import { table, file } => {
            let outcome = executor.import(&table, &file).await?;
            Ok((file, outcome))
        }
    }
}
