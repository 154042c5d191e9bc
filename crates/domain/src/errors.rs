use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid resolver action: {0}")]
    InvalidAction(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Domain record not found: {0}")]
    DomainRecordNotFound(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Page fetch failed: {0}")]
    FetchFailed(String),

    #[error("Content extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Model inference failed: {0}")]
    ModelError(String),

    #[error("Audit log error: {0}")]
    AuditLogError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
