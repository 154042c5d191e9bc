use judol_filter_application::use_cases::{RunSweepUseCase, SweepReport};
use judol_filter_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Runs the classification sweep once or on a fixed period until cancelled.
pub struct SweepJob {
    sweep: Arc<RunSweepUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl SweepJob {
    pub fn new(sweep: Arc<RunSweepUseCase>) -> Self {
        Self {
            sweep,
            interval_secs: 3600,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub async fn run_once(&self) -> Result<SweepReport, DomainError> {
        self.sweep.execute(&self.shutdown).await
    }

    /// Sweeps immediately, then every `interval_secs`, until the token fires.
    /// A sweep in progress stops at the next domain boundary.
    pub async fn run(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting sweep job");

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs.max(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("SweepJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    match self.run_once().await {
                        Ok(report) => {
                            info!(
                                total = report.total,
                                processed = report.processed(),
                                interrupted = report.interrupted,
                                "Sweep completed"
                            );
                        }
                        Err(e) => {
                            error!(error = %e, "Sweep failed");
                        }
                    }
                }
            }
        }
    }

    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }
}
