use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelsConfig {
    #[serde(default = "default_dir")]
    pub dir: String,

    #[serde(default = "default_lexical_vectorizer")]
    pub lexical_vectorizer: String,

    #[serde(default = "default_lexical_classifier")]
    pub lexical_classifier: String,

    #[serde(default = "default_sequence_tokenizer")]
    pub sequence_tokenizer: String,

    #[serde(default = "default_sequence_classifier")]
    pub sequence_classifier: String,
}

impl ModelsConfig {
    /// Resolves an artifact file name against `dir`. Absolute names are
    /// returned untouched.
    pub fn artifact_path(&self, file: &str) -> PathBuf {
        let path = PathBuf::from(file);
        if path.is_absolute() {
            path
        } else {
            PathBuf::from(&self.dir).join(path)
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            lexical_vectorizer: default_lexical_vectorizer(),
            lexical_classifier: default_lexical_classifier(),
            sequence_tokenizer: default_sequence_tokenizer(),
            sequence_classifier: default_sequence_classifier(),
        }
    }
}

fn default_dir() -> String {
    "./models".to_string()
}

fn default_lexical_vectorizer() -> String {
    "tfidf_vectorizer.json".to_string()
}

fn default_lexical_classifier() -> String {
    "lexical_classifier.json".to_string()
}

fn default_sequence_tokenizer() -> String {
    "sequence_tokenizer.json".to_string()
}

fn default_sequence_classifier() -> String {
    "sequence_classifier.json".to_string()
}
