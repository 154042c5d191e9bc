use judol_filter_domain::DomainError;

/// Column index → weight, sorted by column.
pub type SparseVector = Vec<(usize, f64)>;

pub trait LexicalVectorizer: Send + Sync {
    fn transform(&self, text: &str) -> Result<SparseVector, DomainError>;
}

pub trait LexicalClassifier: Send + Sync {
    fn classes(&self) -> &[i64];

    /// Per-class probabilities in `classes()` order, or `None` when the model
    /// has no calibrated probability output.
    fn predict_proba(&self, features: &SparseVector) -> Result<Option<Vec<f64>>, DomainError>;

    fn predict(&self, features: &SparseVector) -> Result<i64, DomainError>;
}

pub trait SequenceTokenizer: Send + Sync {
    fn texts_to_sequence(&self, text: &str) -> Result<Vec<u32>, DomainError>;
}

pub trait SequenceClassifier: Send + Sync {
    /// Positive-class probability for one padded id sequence.
    fn predict_proba(&self, sequence: &[u32]) -> Result<f64, DomainError>;
}
