use async_trait::async_trait;
use judol_filter_application::ports::DomainRecordRepository;
use judol_filter_domain::domain_record::{to_bare_name, to_fqdn, validate_domain};
use judol_filter_domain::{Category, DomainError, DomainRecord, ResolverAction};
use rustc_hash::FxHashSet;
use sqlx::SqlitePool;
use tracing::{debug, error, instrument, warn};

type DomainRecordRow = (String, String, String, Option<String>);

const UPDATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct SqliteDomainRecordRepository {
    pool: SqlitePool,
}

impl SqliteDomainRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: DomainRecordRow) -> DomainRecord {
        let (domain, category, action, updated_at) = row;
        let category = category.parse::<Category>().unwrap_or_else(|_| {
            warn!(domain = %domain, category = %category, "Unrecognized category, treating as Unknown");
            Category::Unknown
        });
        let action = action
            .parse::<ResolverAction>()
            .unwrap_or_else(|_| category.implied_action());
        DomainRecord {
            domain,
            category,
            action,
            updated_at,
        }
    }
}

#[async_trait]
impl DomainRecordRepository for SqliteDomainRecordRepository {
    #[instrument(skip(self))]
    async fn get_unknown_domains(&self) -> Result<Vec<String>, DomainError> {
        let rows = sqlx::query_as::<_, (String,)>(
            "SELECT domain FROM dns_records WHERE category = 'Unknown' COLLATE NOCASE ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query unknown domains");
            DomainError::DatabaseError(e.to_string())
        })?;

        // One row per record type and value, so a name can repeat.
        let mut seen = FxHashSet::default();
        let domains: Vec<String> = rows
            .into_iter()
            .filter_map(|(stored,)| match validate_domain(&stored) {
                Ok(()) => Some(to_bare_name(&stored)),
                Err(e) => {
                    warn!(domain = %stored, error = %e, "Skipping invalid domain name");
                    None
                }
            })
            .filter(|domain| seen.insert(domain.clone()))
            .collect();

        debug!(count = domains.len(), "Loaded unknown domains");
        Ok(domains)
    }

    #[instrument(skip(self))]
    async fn get_by_domain(&self, domain: &str) -> Result<Option<DomainRecord>, DomainError> {
        let row = sqlx::query_as::<_, DomainRecordRow>(
            "SELECT domain, category, action, updated_at FROM dns_records WHERE domain = ? COLLATE NOCASE",
        )
        .bind(to_fqdn(domain))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query domain record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_record))
    }

    #[instrument(skip(self))]
    async fn update_classification(
        &self,
        domain: &str,
        category: Category,
        action: ResolverAction,
    ) -> Result<(), DomainError> {
        let now = chrono::Local::now().format(UPDATED_AT_FORMAT).to_string();

        let result = sqlx::query(
            "UPDATE dns_records SET category = ?, action = ?, updated_at = ? WHERE domain = ? COLLATE NOCASE",
        )
        .bind(category.as_str())
        .bind(action.as_str())
        .bind(&now)
        .bind(domain)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update domain record");
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DomainRecordNotFound(domain.to_string()));
        }

        Ok(())
    }
}
