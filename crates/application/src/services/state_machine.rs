use judol_filter_domain::domain_record::to_fqdn;
use judol_filter_domain::{Category, Classification, DomainError, ResolverAction};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::DomainRecordRepository;

/// Drives a domain record from `Unknown` to its terminal category.
pub struct DomainStateMachine {
    repo: Arc<dyn DomainRecordRepository>,
}

impl DomainStateMachine {
    pub fn new(repo: Arc<dyn DomainRecordRepository>) -> Self {
        Self { repo }
    }

    pub fn transition(classification: &Classification) -> (Category, ResolverAction) {
        let category = match classification {
            Classification::InsufficientContent => Category::Unknown,
            Classification::Verdict(v) if v.decision => Category::Blacklist,
            Classification::Verdict(_) => Category::Whitelist,
        };
        (category, category.implied_action())
    }

    /// Persists `(category, action)` for `domain` in one committed update.
    #[instrument(skip(self))]
    pub async fn apply(
        &self,
        domain: &str,
        category: Category,
        action: ResolverAction,
    ) -> Result<(), DomainError> {
        if category.implied_action() != action {
            return Err(DomainError::InvalidAction(format!(
                "{} is not valid for category {}",
                action, category
            )));
        }

        let fqdn = to_fqdn(domain);
        self.repo
            .update_classification(&fqdn, category, action)
            .await?;

        info!(domain = %fqdn, category = %category, action = %action, "Domain record updated");
        Ok(())
    }
}
