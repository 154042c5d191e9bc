use std::fmt;

/// Result of one model arm. A failed arm carries the reason instead of a
/// probability; fusion reads it as 0.0.
#[derive(Debug, Clone, PartialEq)]
pub enum ArmOutcome {
    Probability(f64),
    Failed(String),
}

impl ArmOutcome {
    pub fn probability(&self) -> f64 {
        match self {
            ArmOutcome::Probability(p) => p.clamp(0.0, 1.0),
            ArmOutcome::Failed(_) => 0.0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ArmOutcome::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleVerdict {
    pub prob_lexical: f64,
    pub prob_sequence: f64,
    pub decision: bool,
}

impl EnsembleVerdict {
    /// Confidence shown for a blocked domain, as a percentage.
    pub fn detection_confidence(&self) -> f64 {
        self.prob_lexical.max(self.prob_sequence) * 100.0
    }

    /// Confidence shown for an allowed domain, as a percentage.
    pub fn safety_confidence(&self) -> f64 {
        (100.0 - self.prob_lexical * 100.0).min(100.0 - self.prob_sequence * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    InsufficientContent,
    Verdict(EnsembleVerdict),
}

impl Classification {
    pub fn verdict(&self) -> Option<&EnsembleVerdict> {
        match self {
            Classification::Verdict(v) => Some(v),
            Classification::InsufficientContent => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::InsufficientContent => f.write_str("insufficient content"),
            Classification::Verdict(v) => write!(
                f,
                "prob_lexical={:.3} prob_sequence={:.3} decision={}",
                v.prob_lexical, v.prob_sequence, v.decision
            ),
        }
    }
}
