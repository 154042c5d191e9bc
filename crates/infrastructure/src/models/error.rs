use judol_filter_domain::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model artifact {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid token pattern: {0}")]
    Pattern(String),

    #[error("Inconsistent model shape: {0}")]
    Shape(String),

    #[error("Feature index {index} out of range for {len} features")]
    FeatureOutOfRange { index: usize, len: usize },

    #[error("Token id {id} out of range for embedding of {len} rows")]
    TokenOutOfRange { id: u32, len: usize },
}

impl From<ModelError> for DomainError {
    fn from(e: ModelError) -> Self {
        DomainError::ModelError(e.to_string())
    }
}
