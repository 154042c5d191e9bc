use serde::{Deserialize, Serialize};

/// Static text resources for the normalization pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourcesConfig {
    /// Two-column informal → canonical word dictionary (Latin-1, no header).
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: String,

    /// Supplementary whitespace-separated stopword list.
    #[serde(default = "default_stopwords_path")]
    pub stopwords_path: String,

    /// Replaces the built-in Indonesian base stopword list when set.
    #[serde(default)]
    pub base_stopwords_path: Option<String>,

    /// Known root words; stemming stops once a candidate is in this list.
    #[serde(default)]
    pub root_words_path: Option<String>,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            stopwords_path: default_stopwords_path(),
            base_stopwords_path: None,
            root_words_path: None,
        }
    }
}

fn default_dictionary_path() -> String {
    "./resources/KamusKata.csv".to_string()
}

fn default_stopwords_path() -> String {
    "./resources/stopwords.txt".to_string()
}
