use judol_filter_application::ports::{LexicalClassifier, SparseVector};
use judol_filter_domain::DomainError;
use serde::Deserialize;

use super::error::ModelError;

/// Multinomial naive Bayes over TF-IDF features.
#[derive(Debug, Clone, Deserialize)]
pub struct MultinomialNb {
    pub classes: Vec<i64>,
    pub class_log_prior: Vec<f64>,
    /// One row per class, one column per feature.
    pub feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    fn joint_log_likelihood(&self, features: &SparseVector) -> Result<Vec<f64>, ModelError> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, row)| {
                features.iter().try_fold(*prior, |acc, &(column, weight)| {
                    row.get(column)
                        .map(|log_prob| acc + weight * log_prob)
                        .ok_or(ModelError::FeatureOutOfRange {
                            index: column,
                            len: row.len(),
                        })
                })
            })
            .collect()
    }

    pub fn probabilities(&self, features: &SparseVector) -> Result<Vec<f64>, ModelError> {
        let jll = self.joint_log_likelihood(features)?;
        let max = jll.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exp: Vec<f64> = jll.iter().map(|v| (v - max).exp()).collect();
        let total: f64 = exp.iter().sum();
        Ok(exp.into_iter().map(|v| v / total).collect())
    }
}

/// Linear decision function. Produces hard labels only.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    pub classes: Vec<i64>,
    /// One row for binary problems, one row per class otherwise.
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

impl LinearModel {
    fn decision(&self, features: &SparseVector) -> Result<Vec<f64>, ModelError> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, intercept)| {
                features.iter().try_fold(*intercept, |acc, &(column, weight)| {
                    row.get(column)
                        .map(|coef| acc + weight * coef)
                        .ok_or(ModelError::FeatureOutOfRange {
                            index: column,
                            len: row.len(),
                        })
                })
            })
            .collect()
    }

    pub fn label(&self, features: &SparseVector) -> Result<i64, ModelError> {
        let scores = self.decision(features)?;
        let index = if scores.len() == 1 {
            usize::from(scores[0] > 0.0)
        } else {
            argmax(&scores)
        };
        Ok(self.classes[index])
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LexicalModel {
    MultinomialNb(MultinomialNb),
    Linear(LinearModel),
}

impl LexicalModel {
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ModelError> {
        let model: LexicalModel =
            serde_json::from_str(json).map_err(|source| ModelError::Parse {
                path: origin.to_string(),
                source,
            })?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        match self {
            LexicalModel::MultinomialNb(nb) => {
                let n = nb.classes.len();
                if n == 0 || nb.class_log_prior.len() != n || nb.feature_log_prob.len() != n {
                    return Err(ModelError::Shape(format!(
                        "naive Bayes has {} classes, {} priors and {} probability rows",
                        n,
                        nb.class_log_prior.len(),
                        nb.feature_log_prob.len()
                    )));
                }
            }
            LexicalModel::Linear(linear) => {
                let rows = linear.coef.len();
                let expected_rows = if linear.classes.len() == 2 {
                    1
                } else {
                    linear.classes.len()
                };
                if linear.classes.len() < 2
                    || rows != expected_rows
                    || linear.intercept.len() != rows
                {
                    return Err(ModelError::Shape(format!(
                        "linear model has {} classes, {} coefficient rows and {} intercepts",
                        linear.classes.len(),
                        rows,
                        linear.intercept.len()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Number of feature columns every row is expected to cover.
    pub fn feature_count(&self) -> Option<usize> {
        match self {
            LexicalModel::MultinomialNb(nb) => nb.feature_log_prob.first().map(Vec::len),
            LexicalModel::Linear(linear) => linear.coef.first().map(Vec::len),
        }
    }
}

impl LexicalClassifier for LexicalModel {
    fn classes(&self) -> &[i64] {
        match self {
            LexicalModel::MultinomialNb(nb) => &nb.classes,
            LexicalModel::Linear(linear) => &linear.classes,
        }
    }

    fn predict_proba(&self, features: &SparseVector) -> Result<Option<Vec<f64>>, DomainError> {
        match self {
            LexicalModel::MultinomialNb(nb) => Ok(Some(nb.probabilities(features)?)),
            LexicalModel::Linear(_) => Ok(None),
        }
    }

    fn predict(&self, features: &SparseVector) -> Result<i64, DomainError> {
        match self {
            LexicalModel::MultinomialNb(nb) => {
                let probs = nb.probabilities(features)?;
                Ok(nb.classes[argmax(&probs)])
            }
            LexicalModel::Linear(linear) => Ok(linear.label(features)?),
        }
    }
}

fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best, best_value), (idx, &value)| {
            if value > best_value {
                (idx, value)
            } else {
                (best, best_value)
            }
        })
        .0
}
