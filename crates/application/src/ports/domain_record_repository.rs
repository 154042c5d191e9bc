use async_trait::async_trait;
use judol_filter_domain::{Category, DomainError, DomainRecord, ResolverAction};

#[async_trait]
pub trait DomainRecordRepository: Send + Sync {
    /// Bare names (no trailing dot, lowercased) of every `Unknown` record,
    /// in store order.
    async fn get_unknown_domains(&self) -> Result<Vec<String>, DomainError>;

    async fn get_by_domain(&self, domain: &str) -> Result<Option<DomainRecord>, DomainError>;

    /// Single-statement keyed update. Fails with `DomainRecordNotFound` when
    /// no row matched.
    async fn update_classification(
        &self,
        domain: &str,
        category: Category,
        action: ResolverAction,
    ) -> Result<(), DomainError>;
}
