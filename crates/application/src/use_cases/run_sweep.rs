use judol_filter_domain::{AuditEntry, AuditStatus, Classification, DomainError};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::ports::{AuditLog, ContentExtractor, DomainRecordRepository, PageFetcher};
use crate::services::{DomainStateMachine, EnsembleEngine, NormalizationPipeline};

/// Placeholder some scrapers emit instead of page text.
const MISSING_CONTENT_SENTINEL: &str = "NA";

const SAMPLE_CHARS: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub total: usize,
    pub blocked: usize,
    pub allowed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub persist_failures: usize,
    pub interrupted: bool,
}

impl SweepReport {
    pub fn processed(&self) -> usize {
        self.blocked + self.allowed + self.skipped + self.errors
    }

    fn record(&mut self, status: &AuditStatus) {
        match status {
            AuditStatus::Blocked { .. } => self.blocked += 1,
            AuditStatus::Allowed { .. } => self.allowed += 1,
            AuditStatus::SkippedEmptyContent => self.skipped += 1,
            AuditStatus::Error(_) => self.errors += 1,
        }
    }
}

/// One pass over every `Unknown` domain record.
pub struct RunSweepUseCase {
    records: Arc<dyn DomainRecordRepository>,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn ContentExtractor>,
    pipeline: Arc<NormalizationPipeline>,
    engine: Arc<EnsembleEngine>,
    state_machine: DomainStateMachine,
    audit_log: Arc<dyn AuditLog>,
}

impl RunSweepUseCase {
    pub fn new(
        records: Arc<dyn DomainRecordRepository>,
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn ContentExtractor>,
        pipeline: Arc<NormalizationPipeline>,
        engine: Arc<EnsembleEngine>,
        audit_log: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            state_machine: DomainStateMachine::new(records.clone()),
            records,
            fetcher,
            extractor,
            pipeline,
            engine,
            audit_log,
        }
    }

    #[instrument(skip(self, cancel))]
    pub async fn execute(&self, cancel: &CancellationToken) -> Result<SweepReport, DomainError> {
        self.pipeline.reset_stem_cache();

        let domains = self.records.get_unknown_domains().await?;
        let mut report = SweepReport {
            total: domains.len(),
            ..SweepReport::default()
        };

        if domains.is_empty() {
            info!("No unknown domains found, nothing to classify");
            return Ok(report);
        }

        info!(count = domains.len(), "Starting classification sweep");

        for domain in &domains {
            if cancel.is_cancelled() {
                warn!(
                    processed = report.processed(),
                    remaining = domains.len() - report.processed(),
                    "Sweep interrupted"
                );
                report.interrupted = true;
                break;
            }

            let status = self.process_domain(domain, &mut report).await;
            report.record(&status);
        }

        info!(
            total = report.total,
            blocked = report.blocked,
            allowed = report.allowed,
            skipped = report.skipped,
            errors = report.errors,
            persist_failures = report.persist_failures,
            "Classification sweep finished"
        );

        Ok(report)
    }

    /// Runs one domain to completion. Nothing escapes this boundary: errors
    /// become an `ERROR` audit entry and leave the record `Unknown`.
    async fn process_domain(&self, domain: &str, report: &mut SweepReport) -> AuditStatus {
        let (classification, status) = match self.classify_domain(domain).await {
            Ok(Classification::InsufficientContent) => {
                warn!(domain = %domain, "Empty content, leaving domain unknown");
                (
                    Classification::InsufficientContent,
                    AuditStatus::SkippedEmptyContent,
                )
            }
            Ok(Classification::Verdict(verdict)) => {
                let status = AuditStatus::from_verdict(&verdict);
                if verdict.decision {
                    info!(
                        domain = %domain,
                        confidence = %format!("{:.2}", verdict.detection_confidence()),
                        "Domain flagged as gambling"
                    );
                }
                (Classification::Verdict(verdict), status)
            }
            Err(e) => {
                error!(domain = %domain, error = %e, "Domain classification failed");
                (
                    Classification::InsufficientContent,
                    AuditStatus::Error(e.to_string()),
                )
            }
        };

        let (category, action) = DomainStateMachine::transition(&classification);
        if let Err(e) = self.state_machine.apply(domain, category, action).await {
            error!(domain = %domain, error = %e, "Failed to persist classification");
            report.persist_failures += 1;
        }

        if let Err(e) = self
            .audit_log
            .append(AuditEntry::now(domain, &status))
            .await
        {
            error!(domain = %domain, error = %e, "Failed to append audit entry");
        }

        status
    }

    async fn classify_domain(&self, domain: &str) -> Result<Classification, DomainError> {
        let html = self.fetcher.fetch(domain).await?;
        let cleaned = self.extractor.extract_and_clean(&html)?;

        debug!(
            domain = %domain,
            html_len = html.len(),
            clean_len = cleaned.len(),
            clean_sample = %sample(&cleaned),
            "Scraped page"
        );

        let trimmed = cleaned.trim();
        if trimmed.is_empty() || trimmed == MISSING_CONTENT_SENTINEL {
            return Ok(Classification::InsufficientContent);
        }

        let document = self.pipeline.normalize(&cleaned);
        Ok(self.engine.classify(&document.to_text()))
    }
}

fn sample(text: &str) -> String {
    if text.is_empty() {
        return "EMPTY".to_string();
    }
    text.chars().take(SAMPLE_CHARS).collect()
}
