use judol_filter_application::services::{EnsembleEngine, NormalizationPipeline};
use judol_filter_domain::Config;
use judol_filter_infrastructure::audit::JsonFileAuditLog;
use judol_filter_infrastructure::models::load_models;
use judol_filter_infrastructure::repositories::SqliteDomainRecordRepository;
use judol_filter_infrastructure::resources::load_normalization_resources;
use judol_filter_infrastructure::scraper::{BrowserlessFetcher, HtmlContentExtractor};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::info;

pub struct Adapters {
    pub records: Arc<SqliteDomainRecordRepository>,
    pub fetcher: Arc<BrowserlessFetcher>,
    pub extractor: Arc<HtmlContentExtractor>,
    pub audit_log: Arc<JsonFileAuditLog>,
    pub pipeline: Arc<NormalizationPipeline>,
    pub engine: Arc<EnsembleEngine>,
}

impl Adapters {
    pub fn new(config: &Config, pool: SqlitePool) -> anyhow::Result<Self> {
        let loaded = load_normalization_resources(&config.resources)?;
        let pipeline = NormalizationPipeline::new(
            Arc::new(loaded.resources),
            Arc::new(loaded.stemmer),
        );

        let models = load_models(&config.models)?;
        let engine = EnsembleEngine::new(
            models.vectorizer,
            models.lexical,
            models.tokenizer,
            models.sequence,
            config.ensemble.clone(),
        );

        info!(
            scraper = %config.scraper.browserless_url,
            audit_log = %config.audit.path,
            "Adapters ready"
        );

        Ok(Self {
            records: Arc::new(SqliteDomainRecordRepository::new(pool)),
            fetcher: Arc::new(BrowserlessFetcher::new(&config.scraper)?),
            extractor: Arc::new(HtmlContentExtractor::new()),
            audit_log: Arc::new(JsonFileAuditLog::new(&config.audit.path)),
            pipeline: Arc::new(pipeline),
            engine: Arc::new(engine),
        })
    }
}
