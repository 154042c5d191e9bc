mod resources;
mod stem_cache;
mod stemmer;
mod tokenizer;

pub use resources::{NormalizationResources, INDONESIAN_STOPWORDS, INFORMAL_STOPWORDS};
pub use stem_cache::StemCache;
pub use stemmer::IndonesianStemmer;
pub use tokenizer::WordTokenizer;

use std::sync::Arc;
use tracing::trace;

use crate::ports::Stemmer;

/// Token sequence produced by [`NormalizationPipeline::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedDocument {
    pub tokens: Vec<String>,
}

impl NormalizedDocument {
    /// Tokens joined by single spaces, the form both model arms consume.
    pub fn to_text(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Cleansing → case-folding → tokenizing → dictionary normalization →
/// stopword removal → stemming.
pub struct NormalizationPipeline {
    resources: Arc<NormalizationResources>,
    tokenizer: WordTokenizer,
    stemmer: Arc<dyn Stemmer>,
    stem_cache: StemCache,
}

impl NormalizationPipeline {
    pub fn new(resources: Arc<NormalizationResources>, stemmer: Arc<dyn Stemmer>) -> Self {
        Self {
            resources,
            tokenizer: WordTokenizer::new(),
            stemmer,
            stem_cache: StemCache::new(),
        }
    }

    pub fn normalize(&self, raw_text: &str) -> NormalizedDocument {
        let cleansed = cleanse(raw_text);
        let folded = cleansed.to_lowercase();
        let tokens = self.tokenizer.tokenize(&folded);

        let tokens: Vec<String> = tokens
            .iter()
            .map(|t| self.resources.canonical(t).to_string())
            .filter(|t| !self.resources.is_stopword(t))
            .map(|t| self.stem_cache.get_or_stem(&t, self.stemmer.as_ref()))
            .collect();

        trace!(
            tokens = tokens.len(),
            cached_stems = self.stem_cache.len(),
            "Document normalized"
        );

        NormalizedDocument { tokens }
    }

    /// Starts a new sweep: stems memoized so far are dropped.
    pub fn reset_stem_cache(&self) {
        self.stem_cache.clear();
    }

    pub fn stem_cache_len(&self) -> usize {
        self.stem_cache.len()
    }
}

/// Replaces every newline sequence with a single space.
pub fn cleanse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}
