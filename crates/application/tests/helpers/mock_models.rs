use judol_filter_application::ports::{
    LexicalClassifier, LexicalVectorizer, SequenceClassifier, SequenceTokenizer, SparseVector,
};
use judol_filter_application::services::EnsembleEngine;
use judol_filter_domain::config::EnsembleConfig;
use judol_filter_domain::DomainError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Both arms answer from a fixed table keyed by the normalized text. Unknown
/// text scores 0.0 on both arms.
pub struct ScriptedModels {
    script: Vec<(String, f64, f64)>,
    lexical_calls: AtomicU64,
    sequence_calls: AtomicU64,
    last_sequence: Mutex<Vec<u32>>,
}

impl ScriptedModels {
    pub fn new(script: Vec<(&str, f64, f64)>) -> Arc<Self> {
        Arc::new(Self {
            script: script
                .into_iter()
                .map(|(text, lex, seq)| (text.to_string(), lex, seq))
                .collect(),
            lexical_calls: AtomicU64::new(0),
            sequence_calls: AtomicU64::new(0),
            last_sequence: Mutex::new(Vec::new()),
        })
    }

    /// Scores every text with the same pair of probabilities.
    pub fn constant(prob_lexical: f64, prob_sequence: f64) -> Arc<Self> {
        Self::new(vec![("*", prob_lexical, prob_sequence)])
    }

    fn lookup(&self, text: &str) -> Option<usize> {
        self.script
            .iter()
            .position(|(t, _, _)| t == text || t == "*")
    }

    pub fn lexical_calls(&self) -> u64 {
        self.lexical_calls.load(Ordering::Relaxed)
    }

    pub fn sequence_calls(&self) -> u64 {
        self.sequence_calls.load(Ordering::Relaxed)
    }

    pub fn last_sequence(&self) -> Vec<u32> {
        self.last_sequence.lock().unwrap().clone()
    }
}

impl LexicalVectorizer for ScriptedModels {
    fn transform(&self, text: &str) -> Result<SparseVector, DomainError> {
        self.lexical_calls.fetch_add(1, Ordering::Relaxed);
        Ok(match self.lookup(text) {
            Some(idx) => vec![(idx, 1.0)],
            None => vec![],
        })
    }
}

impl LexicalClassifier for ScriptedModels {
    fn classes(&self) -> &[i64] {
        &[0, 1]
    }

    fn predict_proba(&self, features: &SparseVector) -> Result<Option<Vec<f64>>, DomainError> {
        let p = features
            .first()
            .map(|(idx, _)| self.script[*idx].1)
            .unwrap_or(0.0);
        Ok(Some(vec![1.0 - p, p]))
    }

    fn predict(&self, _features: &SparseVector) -> Result<i64, DomainError> {
        Ok(0)
    }
}

impl SequenceTokenizer for ScriptedModels {
    fn texts_to_sequence(&self, text: &str) -> Result<Vec<u32>, DomainError> {
        self.sequence_calls.fetch_add(1, Ordering::Relaxed);
        Ok(match self.lookup(text) {
            Some(idx) => vec![idx as u32 + 1],
            None => vec![],
        })
    }
}

impl SequenceClassifier for ScriptedModels {
    fn predict_proba(&self, sequence: &[u32]) -> Result<f64, DomainError> {
        *self.last_sequence.lock().unwrap() = sequence.to_vec();
        Ok(match sequence.first() {
            Some(id) if *id > 0 => self.script[*id as usize - 1].2,
            _ => 0.0,
        })
    }
}

pub fn scripted_engine(models: &Arc<ScriptedModels>, policy: EnsembleConfig) -> EnsembleEngine {
    EnsembleEngine::new(
        models.clone(),
        models.clone(),
        models.clone(),
        models.clone(),
        policy,
    )
}

pub struct FailingVectorizer;

impl LexicalVectorizer for FailingVectorizer {
    fn transform(&self, _text: &str) -> Result<SparseVector, DomainError> {
        Err(DomainError::ModelError("vocabulary mismatch".to_string()))
    }
}

pub struct FailingSequenceClassifier;

impl SequenceClassifier for FailingSequenceClassifier {
    fn predict_proba(&self, _sequence: &[u32]) -> Result<f64, DomainError> {
        Err(DomainError::ModelError("input shape mismatch".to_string()))
    }
}

/// Classifier without probability output; predicts `label` for everything.
pub struct HardLabelClassifier {
    pub classes: Vec<i64>,
    pub label: i64,
}

impl LexicalClassifier for HardLabelClassifier {
    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn predict_proba(&self, _features: &SparseVector) -> Result<Option<Vec<f64>>, DomainError> {
        Ok(None)
    }

    fn predict(&self, _features: &SparseVector) -> Result<i64, DomainError> {
        Ok(self.label)
    }
}

/// Probabilistic classifier returning fixed per-class probabilities.
pub struct FixedProbaClassifier {
    pub classes: Vec<i64>,
    pub probs: Vec<f64>,
}

impl LexicalClassifier for FixedProbaClassifier {
    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn predict_proba(&self, _features: &SparseVector) -> Result<Option<Vec<f64>>, DomainError> {
        Ok(Some(self.probs.clone()))
    }

    fn predict(&self, _features: &SparseVector) -> Result<i64, DomainError> {
        Ok(self.classes[0])
    }
}
