use judol_filter_application::ports::SequenceTokenizer;
use judol_filter_domain::DomainError;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::HashMap;

use super::error::ModelError;

const DEFAULT_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

#[derive(Debug, Deserialize)]
struct TokenizerArtifact {
    word_index: HashMap<String, u32>,
    #[serde(default)]
    num_words: Option<u32>,
    #[serde(default)]
    oov_token: Option<String>,
    #[serde(default = "default_filters")]
    filters: String,
    #[serde(default = "default_lower")]
    lower: bool,
    #[serde(default = "default_split")]
    split: String,
}

fn default_filters() -> String {
    DEFAULT_FILTERS.to_string()
}

fn default_lower() -> bool {
    true
}

fn default_split() -> String {
    " ".to_string()
}

/// Word-index tokenizer for the sequence arm. Ids start at 1; 0 is padding.
#[derive(Debug)]
pub struct KerasTokenizer {
    word_index: FxHashMap<String, u32>,
    num_words: Option<u32>,
    oov_index: Option<u32>,
    filters: Vec<char>,
    lower: bool,
    split: String,
}

impl KerasTokenizer {
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ModelError> {
        let artifact: TokenizerArtifact =
            serde_json::from_str(json).map_err(|source| ModelError::Parse {
                path: origin.to_string(),
                source,
            })?;

        if artifact.word_index.values().any(|&id| id == 0) {
            return Err(ModelError::Shape(
                "word_index id 0 is reserved for padding".to_string(),
            ));
        }
        if artifact.split.is_empty() {
            return Err(ModelError::Shape("split cannot be empty".to_string()));
        }

        let oov_index = match &artifact.oov_token {
            Some(token) => Some(*artifact.word_index.get(token).ok_or_else(|| {
                ModelError::Shape(format!("oov_token '{}' missing from word_index", token))
            })?),
            None => None,
        };

        Ok(Self {
            word_index: artifact.word_index.into_iter().collect(),
            num_words: artifact.num_words,
            oov_index,
            filters: artifact.filters.chars().collect(),
            lower: artifact.lower,
            split: artifact.split,
        })
    }

    /// Largest id `encode` can emit.
    pub fn max_id(&self) -> u32 {
        let max = self.word_index.values().copied().max().unwrap_or(0);
        match self.num_words {
            Some(limit) => max.min(limit.saturating_sub(1)),
            None => max,
        }
    }

    fn words(&self, text: &str) -> Vec<String> {
        let text = if self.lower {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let mut filtered = String::with_capacity(text.len());
        for c in text.chars() {
            if self.filters.contains(&c) {
                filtered.push_str(&self.split);
            } else {
                filtered.push(c);
            }
        }
        filtered
            .split(self.split.as_str())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn within_limit(&self, id: u32) -> bool {
        self.num_words.map_or(true, |limit| id < limit)
    }

    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.words(text)
            .iter()
            .filter_map(|word| match self.word_index.get(word) {
                Some(&id) if self.within_limit(id) => Some(id),
                _ => self.oov_index.filter(|&id| self.within_limit(id)),
            })
            .collect()
    }
}

impl SequenceTokenizer for KerasTokenizer {
    fn texts_to_sequence(&self, text: &str) -> Result<Vec<u32>, DomainError> {
        Ok(self.encode(text))
    }
}
