use fancy_regex::Regex;
use judol_filter_application::ports::{LexicalVectorizer, SparseVector};
use judol_filter_domain::DomainError;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::HashMap;

use super::error::ModelError;

const DEFAULT_TOKEN_PATTERN: &str = r"\b\w\w+\b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TfidfNorm {
    #[default]
    L2,
    L1,
    None,
}

#[derive(Debug, Deserialize)]
struct TfidfArtifact {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    #[serde(default)]
    sublinear_tf: bool,
    #[serde(default)]
    norm: TfidfNorm,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default = "default_lowercase")]
    lowercase: bool,
    #[serde(default)]
    token_pattern: Option<String>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_lowercase() -> bool {
    true
}

/// Term-frequency / inverse-document-frequency vectorizer over a fixed
/// vocabulary.
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: FxHashMap<String, usize>,
    idf: Vec<f64>,
    sublinear_tf: bool,
    norm: TfidfNorm,
    ngram_range: (usize, usize),
    lowercase: bool,
    token_pattern: Regex,
}

impl TfidfVectorizer {
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ModelError> {
        let artifact: TfidfArtifact =
            serde_json::from_str(json).map_err(|source| ModelError::Parse {
                path: origin.to_string(),
                source,
            })?;
        Self::from_artifact(artifact)
    }

    fn from_artifact(artifact: TfidfArtifact) -> Result<Self, ModelError> {
        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ModelError::Shape(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }

        if let Some((term, &column)) = artifact
            .vocabulary
            .iter()
            .find(|(_, &column)| column >= artifact.idf.len())
        {
            return Err(ModelError::Shape(format!(
                "vocabulary term '{}' maps to column {} but idf has {} entries",
                term,
                column,
                artifact.idf.len()
            )));
        }

        // `(?u)` is implied: the regex engine is Unicode-aware by default.
        let pattern = artifact
            .token_pattern
            .as_deref()
            .map(|p| p.trim_start_matches("(?u)"))
            .unwrap_or(DEFAULT_TOKEN_PATTERN);
        let token_pattern = Regex::new(pattern).map_err(|e| ModelError::Pattern(e.to_string()))?;

        Ok(Self {
            vocabulary: artifact.vocabulary.into_iter().collect(),
            idf: artifact.idf,
            sublinear_tf: artifact.sublinear_tf,
            norm: artifact.norm,
            ngram_range: artifact.ngram_range,
            lowercase: artifact.lowercase,
            token_pattern,
        })
    }

    pub fn feature_count(&self) -> usize {
        self.idf.len()
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>, ModelError> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut tokens = Vec::new();
        for found in self.token_pattern.find_iter(&text) {
            let found = found.map_err(|e| ModelError::Pattern(e.to_string()))?;
            tokens.push(found.as_str().to_string());
        }
        Ok(tokens)
    }

    fn term_counts(&self, tokens: &[String]) -> FxHashMap<usize, f64> {
        let mut counts: FxHashMap<usize, f64> = FxHashMap::default();
        let (min_n, max_n) = self.ngram_range;

        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                let term = window.join(" ");
                if let Some(&column) = self.vocabulary.get(&term) {
                    *counts.entry(column).or_insert(0.0) += 1.0;
                }
            }
        }
        counts
    }

    pub fn vectorize(&self, text: &str) -> Result<SparseVector, ModelError> {
        let tokens = self.tokenize(text)?;
        let mut features: SparseVector = self
            .term_counts(&tokens)
            .into_iter()
            .map(|(column, count)| {
                let tf = if self.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                (column, tf * self.idf[column])
            })
            .collect();
        features.sort_unstable_by_key(|(column, _)| *column);

        let norm = match self.norm {
            TfidfNorm::L2 => features.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            TfidfNorm::L1 => features.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            TfidfNorm::None => 0.0,
        };
        if norm > 0.0 {
            for (_, weight) in features.iter_mut() {
                *weight /= norm;
            }
        }

        Ok(features)
    }
}

impl LexicalVectorizer for TfidfVectorizer {
    fn transform(&self, text: &str) -> Result<SparseVector, DomainError> {
        Ok(self.vectorize(text)?)
    }
}
