use async_trait::async_trait;
use judol_filter_domain::{AuditEntry, DomainError};

#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn append(&self, entry: AuditEntry) -> Result<(), DomainError>;
    async fn entries(&self) -> Result<Vec<AuditEntry>, DomainError>;
}
