use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use tablecsv::application::services::{
    JobExecutor, JobStatusTracker, ProcessClock, TransferPaths,
};
use tablecsv::domain::short_duration;
use tablecsv::infrastructure::csv::CsvFileWriter;
use tablecsv::infrastructure::observability::{TracingConfig, init_tracing, redact_database_url};
use tablecsv::infrastructure::persistence::{MySqlTableStore, create_pool};
use tablecsv::presentation::cli::{prompt_database_url, run_cli_job};
use tablecsv::presentation::{AppState, CliArgs, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let clock = ProcessClock::start();
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;

    let mut settings = Settings::load(environment).context("Failed to load settings")?;
    settings.apply_cli(&args);

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));
    tracing::info!(environment = %environment, "Starting table transfer service");

    let job = args.job()?;

    let database_url = match settings.database.url.clone() {
        Some(url) => url,
        None => match prompt_database_url(io::stdin().lock(), io::stdout())? {
            Some(url) => url,
            None => {
                println!("Bye!");
                return Ok(());
            }
        },
    };

    tracing::info!(database = %redact_database_url(&database_url), "Connecting to database");
    let pool = create_pool(&database_url, settings.database.max_connections)
        .await
        .context("Failed to connect to database")?;

    let import_dir = match settings.import_dir() {
        Some(dir) => dir,
        None => TransferPaths::executable_dir().context("Failed to locate import directory")?,
    };
    let paths = TransferPaths::new(settings.export_dir(), import_dir);
    tracing::info!(
        export_dir = %paths.export_dir.display(),
        import_dir = %paths.import_dir.display(),
        "Transfer directories resolved"
    );

    let table_store = Arc::new(MySqlTableStore::new(
        pool,
        settings.transfer.insert_batch_size,
    ));
    let executor = Arc::new(JobExecutor::new(
        table_store,
        Arc::new(CsvFileWriter::new()),
        Arc::new(JobStatusTracker::new()),
        paths,
    ));

    if let Some(job) = job {
        let (file, outcome) = run_cli_job(&executor, job).await?;
        tracing::info!(
            file = %file,
            rows = outcome.rows,
            elapsed = %short_duration(outcome.elapsed),
            "Transfer complete"
        );
        return Ok(());
    }

    let router = create_router(AppState::new(executor, clock));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
