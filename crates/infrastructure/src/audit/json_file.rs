use async_trait::async_trait;
use judol_filter_application::ports::AuditLog;
use judol_filter_domain::{AuditEntry, DomainError};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Audit trail kept as one pretty-printed JSON array. Every append rewrites
/// the whole file.
pub struct JsonFileAuditLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<AuditEntry>, DomainError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DomainError::AuditLogError(e.to_string())),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            DomainError::AuditLogError(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn write_all(&self, entries: &[AuditEntry]) -> Result<(), DomainError> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        entries
            .serialize(&mut serializer)
            .map_err(|e| DomainError::AuditLogError(e.to_string()))?;

        tokio::fs::write(&self.path, buffer)
            .await
            .map_err(|e| DomainError::AuditLogError(e.to_string()))
    }
}

#[async_trait]
impl AuditLog for JsonFileAuditLog {
    #[instrument(skip(self, entry), fields(domain = %entry.domain))]
    async fn append(&self, entry: AuditEntry) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        entries.push(entry);
        self.write_all(&entries).await?;
        debug!(entries = entries.len(), "Audit entry appended");
        Ok(())
    }

    async fn entries(&self) -> Result<Vec<AuditEntry>, DomainError> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }
}
