//! Judol Filter Domain Layer
pub mod audit;
pub mod config;
pub mod domain_record;
pub mod errors;
pub mod verdict;

pub use audit::{AuditEntry, AuditStatus};
pub use config::{CliOverrides, Config, ConfigError};
pub use domain_record::{Category, DomainRecord, ResolverAction};
pub use errors::DomainError;
pub use verdict::{ArmOutcome, Classification, EnsembleVerdict};
