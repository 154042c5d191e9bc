use judol_filter_domain::DomainError;

pub trait ContentExtractor: Send + Sync {
    /// Visible body text of a rendered page, one block per line.
    fn extract_and_clean(&self, html: &str) -> Result<String, DomainError>;
}
