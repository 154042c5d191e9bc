use async_trait::async_trait;
use judol_filter_application::ports::{
    AuditLog, ContentExtractor, DomainRecordRepository, LexicalClassifier, LexicalVectorizer,
    PageFetcher, SequenceClassifier, SequenceTokenizer, SparseVector, Stemmer,
};
use judol_filter_application::services::{
    EnsembleEngine, NormalizationPipeline, NormalizationResources,
};
use judol_filter_application::use_cases::RunSweepUseCase;
use judol_filter_domain::config::EnsembleConfig;
use judol_filter_domain::{AuditEntry, Category, DomainError, ResolverAction};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub struct MockDomainRecordRepository {
    unknown: Mutex<Vec<String>>,
    read_count: AtomicU64,
    fail_reads: AtomicBool,
}

impl MockDomainRecordRepository {
    pub fn new(unknown: &[&str]) -> Self {
        Self {
            unknown: Mutex::new(unknown.iter().map(|d| d.to_string()).collect()),
            read_count: AtomicU64::new(0),
            fail_reads: AtomicBool::new(false),
        }
    }

    pub fn read_count(&self) -> u64 {
        self.read_count.load(Ordering::Relaxed)
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl DomainRecordRepository for MockDomainRecordRepository {
    async fn get_unknown_domains(&self) -> Result<Vec<String>, DomainError> {
        self.read_count.fetch_add(1, Ordering::Relaxed);
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(DomainError::DatabaseError("database is locked".to_string()));
        }
        Ok(self.unknown.lock().unwrap().clone())
    }

    async fn get_by_domain(
        &self,
        _domain: &str,
    ) -> Result<Option<judol_filter_domain::DomainRecord>, DomainError> {
        Ok(None)
    }

    async fn update_classification(
        &self,
        domain: &str,
        category: Category,
        _action: ResolverAction,
    ) -> Result<(), DomainError> {
        if category.is_terminal() {
            let bare = domain.trim_end_matches('.');
            self.unknown.lock().unwrap().retain(|d| d != bare);
        }
        Ok(())
    }
}

/// Serves the same page for every domain.
pub struct StaticPageFetcher(pub String);

#[async_trait]
impl PageFetcher for StaticPageFetcher {
    async fn fetch(&self, _domain: &str) -> Result<String, DomainError> {
        Ok(self.0.clone())
    }
}

pub struct PassthroughExtractor;

impl ContentExtractor for PassthroughExtractor {
    fn extract_and_clean(&self, html: &str) -> Result<String, DomainError> {
        Ok(html.to_string())
    }
}

#[derive(Default)]
pub struct MockAuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MockAuditLog {
    pub fn snapshot(&self) -> Vec<AuditEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditLog for MockAuditLog {
    async fn append(&self, entry: AuditEntry) -> Result<(), DomainError> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }

    async fn entries(&self) -> Result<Vec<AuditEntry>, DomainError> {
        Ok(self.snapshot())
    }
}

pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }
}

/// Scores every non-empty document with the same probability on both arms.
pub struct ConstantModels(pub f64);

impl LexicalVectorizer for ConstantModels {
    fn transform(&self, _text: &str) -> Result<SparseVector, DomainError> {
        Ok(vec![(0, 1.0)])
    }
}

impl LexicalClassifier for ConstantModels {
    fn classes(&self) -> &[i64] {
        &[0, 1]
    }

    fn predict_proba(&self, _features: &SparseVector) -> Result<Option<Vec<f64>>, DomainError> {
        Ok(Some(vec![1.0 - self.0, self.0]))
    }

    fn predict(&self, _features: &SparseVector) -> Result<i64, DomainError> {
        Ok(i64::from(self.0 >= 0.5))
    }
}

impl SequenceTokenizer for ConstantModels {
    fn texts_to_sequence(&self, _text: &str) -> Result<Vec<u32>, DomainError> {
        Ok(vec![1])
    }
}

impl SequenceClassifier for ConstantModels {
    fn predict_proba(&self, _sequence: &[u32]) -> Result<f64, DomainError> {
        Ok(self.0)
    }
}

pub struct SweepFixture {
    pub repo: Arc<MockDomainRecordRepository>,
    pub audit: Arc<MockAuditLog>,
    pub use_case: Arc<RunSweepUseCase>,
}

pub fn sweep_fixture(unknown: &[&str], page: &str, probability: f64) -> SweepFixture {
    let repo = Arc::new(MockDomainRecordRepository::new(unknown));
    let audit = Arc::new(MockAuditLog::default());
    let models = Arc::new(ConstantModels(probability));
    let pipeline = Arc::new(NormalizationPipeline::new(
        Arc::new(NormalizationResources::default()),
        Arc::new(IdentityStemmer),
    ));
    let engine = Arc::new(EnsembleEngine::new(
        models.clone(),
        models.clone(),
        models.clone(),
        models,
        EnsembleConfig::default(),
    ));

    let use_case = Arc::new(RunSweepUseCase::new(
        repo.clone(),
        Arc::new(StaticPageFetcher(page.to_string())),
        Arc::new(PassthroughExtractor),
        pipeline,
        engine,
        audit.clone(),
    ));

    SweepFixture {
        repo,
        audit,
        use_case,
    }
}
