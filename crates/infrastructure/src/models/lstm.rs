use judol_filter_application::ports::SequenceClassifier;
use judol_filter_domain::DomainError;
use serde::Deserialize;

use super::error::ModelError;

/// Single LSTM layer. Gate blocks are laid out input, forget, cell, output
/// along the last axis of `kernel`, `recurrent_kernel` and `bias`.
#[derive(Debug, Clone, Deserialize)]
pub struct LstmLayer {
    /// `[embedding_dim][4 * units]`
    pub kernel: Vec<Vec<f64>>,
    /// `[units][4 * units]`
    pub recurrent_kernel: Vec<Vec<f64>>,
    /// `[4 * units]`
    pub bias: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Embedding → LSTM → sigmoid dense classifier over padded id sequences.
#[derive(Debug, Clone, Deserialize)]
pub struct LstmClassifier {
    /// `[vocab_size][embedding_dim]`
    pub embedding: Vec<Vec<f64>>,
    pub lstm: LstmLayer,
    pub dense: DenseLayer,
    /// Skip padding steps (id 0) instead of feeding row 0 of the embedding.
    #[serde(default)]
    pub mask_zero: bool,
}

impl LstmClassifier {
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ModelError> {
        let model: LstmClassifier =
            serde_json::from_str(json).map_err(|source| ModelError::Parse {
                path: origin.to_string(),
                source,
            })?;
        model.validate()?;
        Ok(model)
    }

    pub fn units(&self) -> usize {
        self.lstm.bias.len() / 4
    }

    pub fn vocab_size(&self) -> usize {
        self.embedding.len()
    }

    fn validate(&self) -> Result<(), ModelError> {
        let gates = self.lstm.bias.len();
        let units = gates / 4;
        if units == 0 || gates % 4 != 0 {
            return Err(ModelError::Shape(format!(
                "LSTM bias length {} is not a positive multiple of 4",
                gates
            )));
        }

        let embedding_dim = self.embedding.first().map_or(0, Vec::len);
        if embedding_dim == 0 || self.embedding.iter().any(|row| row.len() != embedding_dim) {
            return Err(ModelError::Shape(
                "embedding rows must be non-empty and of equal width".to_string(),
            ));
        }

        if self.lstm.kernel.len() != embedding_dim
            || self.lstm.kernel.iter().any(|row| row.len() != gates)
        {
            return Err(ModelError::Shape(format!(
                "LSTM kernel must be {}x{}",
                embedding_dim, gates
            )));
        }

        if self.lstm.recurrent_kernel.len() != units
            || self.lstm.recurrent_kernel.iter().any(|row| row.len() != gates)
        {
            return Err(ModelError::Shape(format!(
                "LSTM recurrent kernel must be {}x{}",
                units, gates
            )));
        }

        if self.dense.weights.len() != units {
            return Err(ModelError::Shape(format!(
                "dense layer expects {} weights, got {}",
                units,
                self.dense.weights.len()
            )));
        }

        Ok(())
    }

    pub fn forward(&self, sequence: &[u32]) -> Result<f64, ModelError> {
        let units = self.units();
        let mut h = vec![0.0; units];
        let mut c = vec![0.0; units];
        let mut z = vec![0.0; 4 * units];

        for &id in sequence {
            if self.mask_zero && id == 0 {
                continue;
            }
            let x = self
                .embedding
                .get(id as usize)
                .ok_or(ModelError::TokenOutOfRange {
                    id,
                    len: self.embedding.len(),
                })?;

            z.copy_from_slice(&self.lstm.bias);
            for (xi, row) in x.iter().zip(&self.lstm.kernel) {
                for (zj, w) in z.iter_mut().zip(row) {
                    *zj += xi * w;
                }
            }
            for (hi, row) in h.iter().zip(&self.lstm.recurrent_kernel) {
                for (zj, w) in z.iter_mut().zip(row) {
                    *zj += hi * w;
                }
            }

            for k in 0..units {
                let input = sigmoid(z[k]);
                let forget = sigmoid(z[units + k]);
                let candidate = z[2 * units + k].tanh();
                let output = sigmoid(z[3 * units + k]);
                c[k] = forget * c[k] + input * candidate;
                h[k] = output * c[k].tanh();
            }
        }

        let logit = h
            .iter()
            .zip(&self.dense.weights)
            .fold(self.dense.bias, |acc, (hi, w)| acc + hi * w);
        Ok(sigmoid(logit))
    }
}

impl SequenceClassifier for LstmClassifier {
    fn predict_proba(&self, sequence: &[u32]) -> Result<f64, DomainError> {
        Ok(self.forward(sequence)?)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
