use serde::{Deserialize, Serialize};

use crate::verdict::EnsembleVerdict;

pub const AUDIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub domain: String,
    pub status: String,
    pub timestamp: String,
}

impl AuditEntry {
    pub fn now(domain: impl Into<String>, status: &AuditStatus) -> Self {
        Self {
            domain: domain.into(),
            status: status.to_string(),
            timestamp: chrono::Local::now()
                .format(AUDIT_TIMESTAMP_FORMAT)
                .to_string(),
        }
    }
}

/// Outcome of one domain in a sweep, rendered into the audit log.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditStatus {
    Blocked { confidence: f64 },
    Allowed { confidence: f64 },
    SkippedEmptyContent,
    Error(String),
}

impl AuditStatus {
    pub fn from_verdict(verdict: &EnsembleVerdict) -> Self {
        if verdict.decision {
            AuditStatus::Blocked {
                confidence: verdict.detection_confidence(),
            }
        } else {
            AuditStatus::Allowed {
                confidence: verdict.safety_confidence(),
            }
        }
    }
}

impl std::fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditStatus::Blocked { confidence } => {
                write!(f, "BLOCKED (ML Detected {:.2}%)", confidence)
            }
            AuditStatus::Allowed { confidence } => write!(f, "ALLOWED (Safe {:.2}%)", confidence),
            AuditStatus::SkippedEmptyContent => f.write_str("SKIPPED (Empty content)"),
            AuditStatus::Error(message) => write!(f, "ERROR ({})", message),
        }
    }
}
