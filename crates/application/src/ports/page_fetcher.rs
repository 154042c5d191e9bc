use async_trait::async_trait;
use judol_filter_domain::DomainError;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Rendered HTML for `domain`. Adapters return an empty string when the
    /// page could not be loaded; `Err` is reserved for unexpected failures.
    async fn fetch(&self, domain: &str) -> Result<String, DomainError>;
}
