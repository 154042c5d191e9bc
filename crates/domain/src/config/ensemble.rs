use serde::{Deserialize, Serialize};

/// Decision policy constants for the two-arm ensemble.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EnsembleConfig {
    #[serde(default = "default_lexical_threshold")]
    pub lexical_threshold: f64,

    #[serde(default = "default_sequence_threshold")]
    pub sequence_threshold: f64,

    /// Fixed id-sequence length fed to the sequence model.
    #[serde(default = "default_sequence_length")]
    pub sequence_length: usize,

    /// Class label treated as "gambling" by the lexical classifier.
    #[serde(default = "default_positive_label")]
    pub positive_label: i64,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            lexical_threshold: default_lexical_threshold(),
            sequence_threshold: default_sequence_threshold(),
            sequence_length: default_sequence_length(),
            positive_label: default_positive_label(),
        }
    }
}

fn default_lexical_threshold() -> f64 {
    0.8
}

fn default_sequence_threshold() -> f64 {
    0.7
}

fn default_sequence_length() -> usize {
    100
}

fn default_positive_label() -> i64 {
    1
}
