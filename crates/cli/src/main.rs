use clap::Parser;
use judol_filter_domain::CliOverrides;
use judol_filter_jobs::SweepJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod shutdown;

#[derive(Parser)]
#[command(name = "judol-filter")]
#[command(version)]
#[command(about = "Judol Filter - classifies unknown resolver domains as gambling or safe")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Resolver record database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Seconds between sweeps; 0 runs a single sweep and exits
    #[arg(short = 'i', long, value_name = "SECS")]
    interval: Option<u64>,

    /// Audit log file path
    #[arg(long, value_name = "PATH")]
    audit_log: Option<String>,

    /// Directory holding the model artifacts
    #[arg(long, value_name = "DIR")]
    models_dir: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database_path: cli.database,
        log_level: cli.log_level,
        interval_secs: cli.interval,
        audit_log_path: cli.audit_log,
        models_dir: cli.models_dir,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Judol Filter v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let adapters = di::Adapters::new(&config, pool)?;
    let use_cases = di::UseCases::new(&adapters);

    let shutdown = CancellationToken::new();
    shutdown::listen(shutdown.clone());

    let job = SweepJob::new(use_cases.run_sweep.clone())
        .with_interval(config.sweep.interval_secs)
        .with_cancellation(shutdown.clone());

    if config.sweep.is_periodic() {
        Arc::new(job).run().await;
    } else {
        let report = job.run_once().await?;
        info!(
            total = report.total,
            blocked = report.blocked,
            allowed = report.allowed,
            skipped = report.skipped,
            errors = report.errors,
            "Single sweep finished"
        );
    }

    info!("Judol Filter stopped");
    Ok(())
}
