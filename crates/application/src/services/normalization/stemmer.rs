//! Indonesian affix-stripping stemmer.
//!
//! Removal happens in the classic order: particle, possessive pronoun, then
//! either first-order prefix → derivational suffix → second-order prefix, or
//! (when no first-order prefix applies) second-order prefix → derivational
//! suffix. Every removal requires the word to still have more than two
//! syllables, approximated by counting vowels.
//!
//! Nasal prefixes before a vowel are ambiguous (`pemain` is `pe-main`,
//! `memukul` is `me-pukul`), so each recoding is tried in turn. With a
//! root-word lexicon loaded, the first candidate that reaches a known root
//! wins; otherwise the first candidate's result is kept.

use std::collections::HashSet;

use crate::ports::Stemmer;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    Di,
    Ke,
    Ter,
    Meng,
    Peng,
    Ber,
    Per,
}

#[derive(Debug, Clone, Default)]
pub struct IndonesianStemmer {
    root_words: HashSet<String>,
}

impl IndonesianStemmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            root_words: words.into_iter().filter(|w| !w.is_empty()).collect(),
        }
    }

    fn is_root(&self, word: &str) -> bool {
        self.root_words.contains(word)
    }

    fn is_done(&self, word: &str) -> bool {
        self.is_root(word) || measure(word) <= 2
    }

    fn stem_word(&self, word: &str) -> String {
        if self.is_done(word) {
            return word.to_string();
        }

        let mut current = word.to_string();

        if let Some(rest) = strip_any_suffix(&current, &["kah", "lah", "pun"]) {
            current = rest;
            if self.is_done(&current) {
                return current;
            }
        }

        if let Some(rest) = strip_any_suffix(&current, &["ku", "mu", "nya"]) {
            current = rest;
            if self.is_done(&current) {
                return current;
            }
        }

        let candidates = first_order_candidates(&current);
        if candidates.is_empty() {
            return self.strip_second_order_first(current);
        }

        let mut fallback = None;
        for (candidate, prefix) in candidates {
            let stem = self.strip_after_first_order(candidate, prefix);
            if self.is_root(&stem) {
                return stem;
            }
            fallback.get_or_insert(stem);
        }
        fallback.unwrap_or(current)
    }

    fn strip_after_first_order(&self, mut current: String, prefix: Prefix) -> String {
        if self.is_done(&current) {
            return current;
        }
        if let Some(rest) = strip_derivational_suffix(&current, Some(prefix)) {
            current = rest;
            if self.is_done(&current) {
                return current;
            }
        }
        if let Some((rest, _)) = strip_second_order_prefix(&current) {
            current = rest;
        }
        current
    }

    fn strip_second_order_first(&self, mut current: String) -> String {
        let mut prefix = None;
        if let Some((rest, p)) = strip_second_order_prefix(&current) {
            current = rest;
            prefix = Some(p);
            if self.is_done(&current) {
                return current;
            }
        }
        if let Some(rest) = strip_derivational_suffix(&current, prefix) {
            current = rest;
        }
        current
    }
}

impl Stemmer for IndonesianStemmer {
    fn stem(&self, token: &str) -> String {
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_lowercase()) {
            return token.to_string();
        }
        self.stem_word(token)
    }
}

fn measure(word: &str) -> usize {
    word.chars().filter(|c| VOWELS.contains(c)).count()
}

fn starts_with_vowel(word: &str) -> bool {
    word.chars().next().is_some_and(|c| VOWELS.contains(&c))
}

fn starts_with_any(word: &str, letters: &str) -> bool {
    word.chars().next().is_some_and(|c| letters.contains(c))
}

/// Liquid or glide followed by a vowel (`melihat`, `merasa`, `mewarnai`).
fn starts_with_liquid_vowel(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some('l' | 'r' | 'w' | 'y')) && starts_with_vowel(chars.as_str())
}

fn strip_any_suffix(word: &str, suffixes: &[&str]) -> Option<String> {
    suffixes.iter().find_map(|suffix| {
        word.strip_suffix(suffix)
            .filter(|rest| !rest.is_empty())
            .map(str::to_string)
    })
}

/// Recodings of the nasal after a `me-`/`pe-` prefix, most likely first.
fn nasal_candidates(after: &str, prefix: Prefix) -> Vec<(String, Prefix)> {
    let with = |stem: String| (stem, prefix);

    if let Some(rest) = after.strip_prefix("ng") {
        return if starts_with_vowel(rest) {
            vec![with(rest.to_string()), with(format!("k{}", rest))]
        } else {
            vec![with(rest.to_string())]
        };
    }
    if let Some(rest) = after.strip_prefix("ny") {
        if starts_with_vowel(rest) {
            return vec![with(format!("s{}", rest)), with(format!("ny{}", rest))];
        }
    }
    if let Some(rest) = after.strip_prefix('m') {
        return if starts_with_vowel(rest) {
            vec![with(format!("p{}", rest)), with(format!("m{}", rest))]
        } else {
            vec![with(rest.to_string())]
        };
    }
    if let Some(rest) = after.strip_prefix('n') {
        return if starts_with_vowel(rest) {
            vec![with(format!("t{}", rest)), with(format!("n{}", rest))]
        } else {
            vec![with(rest.to_string())]
        };
    }
    Vec::new()
}

fn first_order_candidates(word: &str) -> Vec<(String, Prefix)> {
    if let Some(after) = word.strip_prefix("me") {
        if starts_with_liquid_vowel(after) {
            return vec![(after.to_string(), Prefix::Meng)];
        }
        return nasal_candidates(after, Prefix::Meng);
    }
    // Bare `pe-` is handled as a second-order prefix.
    if let Some(after) = word.strip_prefix("pe") {
        return nasal_candidates(after, Prefix::Peng);
    }
    for (text, prefix) in [("di", Prefix::Di), ("ter", Prefix::Ter), ("ke", Prefix::Ke)] {
        if let Some(rest) = word.strip_prefix(text) {
            return vec![(rest.to_string(), prefix)];
        }
    }
    Vec::new()
}

fn strip_second_order_prefix(word: &str) -> Option<(String, Prefix)> {
    if word == "belajar" || word == "pelajar" {
        return Some(("ajar".to_string(), Prefix::Ber));
    }
    if let Some(rest) = word.strip_prefix("ber") {
        return Some((rest.to_string(), Prefix::Ber));
    }
    if let Some(rest) = consonant_er_stem(word, "be") {
        return Some((rest, Prefix::Ber));
    }
    if let Some(rest) = word.strip_prefix("per") {
        return Some((rest.to_string(), Prefix::Per));
    }
    if let Some(rest) = consonant_er_stem(word, "pe") {
        return Some((rest, Prefix::Per));
    }
    if let Some(rest) = word.strip_prefix("pe") {
        // pe- only before a liquid or glide + vowel, or a non-nasal consonant
        if starts_with_liquid_vowel(rest)
            || (!starts_with_vowel(rest) && !starts_with_any(rest, "lrwymn"))
        {
            return Some((rest.to_string(), Prefix::Per));
        }
    }
    None
}

/// be-/pe- + consonant + "er" (bekerja → kerja, pekerja → kerja).
fn consonant_er_stem(word: &str, prefix: &str) -> Option<String> {
    let rest = word.strip_prefix(prefix)?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    (!VOWELS.contains(&first) && chars.as_str().starts_with("er")).then(|| rest.to_string())
}

fn strip_derivational_suffix(word: &str, prefix: Option<Prefix>) -> Option<String> {
    if !matches!(prefix, Some(Prefix::Ke) | Some(Prefix::Peng)) {
        if let Some(rest) = word.strip_suffix("kan").filter(|r| !r.is_empty()) {
            return Some(rest.to_string());
        }
    }
    if !matches!(
        prefix,
        Some(Prefix::Di) | Some(Prefix::Meng) | Some(Prefix::Ter)
    ) {
        if let Some(rest) = word.strip_suffix("an").filter(|r| !r.is_empty()) {
            return Some(rest.to_string());
        }
    }
    if !matches!(
        prefix,
        Some(Prefix::Ber) | Some(Prefix::Ke) | Some(Prefix::Peng)
    ) {
        if let Some(rest) = word.strip_suffix('i').filter(|r| !r.ends_with('s')) {
            if !rest.is_empty() {
                return Some(rest.to_string());
            }
        }
    }
    None
}
