mod audit_log;
mod content_extractor;
mod domain_record_repository;
mod models;
mod page_fetcher;
mod stemmer;

pub use audit_log::AuditLog;
pub use content_extractor::ContentExtractor;
pub use domain_record_repository::DomainRecordRepository;
pub use models::{
    LexicalClassifier, LexicalVectorizer, SequenceClassifier, SequenceTokenizer, SparseVector,
};
pub use page_fetcher::PageFetcher;
pub use stemmer::Stemmer;
