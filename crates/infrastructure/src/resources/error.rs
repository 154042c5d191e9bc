use judol_filter_domain::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Failed to read resource {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dictionary line {line} in {path}: expected at least two columns")]
    MalformedDictionaryLine { path: String, line: usize },
}

impl From<ResourceError> for DomainError {
    fn from(e: ResourceError) -> Self {
        match e {
            ResourceError::Read { .. } => DomainError::IoError(e.to_string()),
            ResourceError::MalformedDictionaryLine { .. } => DomainError::ConfigError(e.to_string()),
        }
    }
}
