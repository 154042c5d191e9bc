use judol_filter_domain::config::EnsembleConfig;
use judol_filter_domain::{ArmOutcome, Classification, EnsembleVerdict};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::ports::{LexicalClassifier, LexicalVectorizer, SequenceClassifier, SequenceTokenizer};

/// Two-arm classifier with conjunctive fusion.
///
/// The lexical arm is a term-frequency vectorizer feeding a probabilistic
/// classifier; the sequence arm maps words to vocabulary ids, pads them to a
/// fixed length and runs a recurrent model. A domain is positive only when
/// both arms clear their threshold. An arm that fails contributes 0.0.
pub struct EnsembleEngine {
    vectorizer: Arc<dyn LexicalVectorizer>,
    lexical: Arc<dyn LexicalClassifier>,
    tokenizer: Arc<dyn SequenceTokenizer>,
    sequence: Arc<dyn SequenceClassifier>,
    policy: EnsembleConfig,
}

impl EnsembleEngine {
    pub fn new(
        vectorizer: Arc<dyn LexicalVectorizer>,
        lexical: Arc<dyn LexicalClassifier>,
        tokenizer: Arc<dyn SequenceTokenizer>,
        sequence: Arc<dyn SequenceClassifier>,
        policy: EnsembleConfig,
    ) -> Self {
        Self {
            vectorizer,
            lexical,
            tokenizer,
            sequence,
            policy,
        }
    }

    pub fn classify(&self, document_text: &str) -> Classification {
        if document_text.trim().is_empty() {
            return Classification::InsufficientContent;
        }

        let lexical = self.lexical_arm(document_text);
        if let ArmOutcome::Failed(reason) = &lexical {
            warn!(error = %reason, "Lexical arm failed, scoring as 0.0");
        }

        let sequence = self.sequence_arm(document_text);
        if let ArmOutcome::Failed(reason) = &sequence {
            warn!(error = %reason, "Sequence arm failed, scoring as 0.0");
        }

        let verdict = self.fuse(&lexical, &sequence);
        debug!(
            prob_lexical = verdict.prob_lexical,
            prob_sequence = verdict.prob_sequence,
            decision = verdict.decision,
            "Ensemble verdict"
        );

        Classification::Verdict(verdict)
    }

    pub fn fuse(&self, lexical: &ArmOutcome, sequence: &ArmOutcome) -> EnsembleVerdict {
        let prob_lexical = lexical.probability();
        let prob_sequence = sequence.probability();
        let is_lexical_positive = prob_lexical >= self.policy.lexical_threshold;
        let is_sequence_positive = prob_sequence >= self.policy.sequence_threshold;

        EnsembleVerdict {
            prob_lexical,
            prob_sequence,
            decision: is_lexical_positive && is_sequence_positive,
        }
    }

    fn lexical_arm(&self, text: &str) -> ArmOutcome {
        let features = match self.vectorizer.transform(text) {
            Ok(features) => features,
            Err(e) => return ArmOutcome::Failed(e.to_string()),
        };

        match self.lexical.predict_proba(&features) {
            Ok(Some(probs)) => {
                let idx = self.positive_index(probs.len());
                match probs.get(idx) {
                    Some(p) if p.is_finite() => ArmOutcome::Probability(*p),
                    Some(p) => ArmOutcome::Failed(format!("non-finite probability {}", p)),
                    None => ArmOutcome::Failed(format!(
                        "positive class index {} out of range for {} probabilities",
                        idx,
                        probs.len()
                    )),
                }
            }
            Ok(None) => match self.lexical.predict(&features) {
                Ok(label) if label == self.policy.positive_label => ArmOutcome::Probability(1.0),
                Ok(_) => ArmOutcome::Probability(0.0),
                Err(e) => ArmOutcome::Failed(e.to_string()),
            },
            Err(e) => ArmOutcome::Failed(e.to_string()),
        }
    }

    /// Column of the positive class: the configured label when the model
    /// knows it, otherwise the second column if there is one.
    fn positive_index(&self, prob_len: usize) -> usize {
        let classes = self.lexical.classes();
        if let Some(idx) = classes
            .iter()
            .position(|c| *c == self.policy.positive_label)
        {
            return idx;
        }
        let known = if classes.is_empty() {
            prob_len
        } else {
            classes.len()
        };
        if known > 1 {
            1
        } else {
            0
        }
    }

    fn sequence_arm(&self, text: &str) -> ArmOutcome {
        let ids = match self.tokenizer.texts_to_sequence(text) {
            Ok(ids) => ids,
            Err(e) => return ArmOutcome::Failed(e.to_string()),
        };
        let padded = pad_sequence(&ids, self.policy.sequence_length);

        match self.sequence.predict_proba(&padded) {
            Ok(p) if p.is_finite() => ArmOutcome::Probability(p),
            Ok(p) => ArmOutcome::Failed(format!("non-finite probability {}", p)),
            Err(e) => ArmOutcome::Failed(e.to_string()),
        }
    }
}

/// Fits `ids` to `len`: zeros appended when short, leading ids dropped when
/// long.
pub fn pad_sequence(ids: &[u32], len: usize) -> Vec<u32> {
    let mut padded = Vec::with_capacity(len);
    let start = ids.len().saturating_sub(len);
    padded.extend_from_slice(&ids[start..]);
    padded.resize(len, 0);
    padded
}
