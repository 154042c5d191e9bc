use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use crate::ports::Stemmer;

/// Token → stem memo shared by every document of a sweep.
pub struct StemCache {
    entries: DashMap<String, String, FxBuildHasher>,
}

impl StemCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Cached stem of `token`, computing and storing it on first sight.
    pub fn get_or_stem(&self, token: &str, stemmer: &dyn Stemmer) -> String {
        if let Some(stem) = self.entries.get(token) {
            return stem.value().clone();
        }
        self.entries
            .entry(token.to_string())
            .or_insert_with(|| stemmer.stem(token))
            .value()
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for StemCache {
    fn default() -> Self {
        Self::new()
    }
}
