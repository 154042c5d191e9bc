use judol_filter_domain::config::ModelsConfig;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use super::error::ModelError;
use super::lexical::LexicalModel;
use super::lstm::LstmClassifier;
use super::sequence_tokenizer::KerasTokenizer;
use super::tfidf::TfidfVectorizer;

pub struct LoadedModels {
    pub vectorizer: Arc<TfidfVectorizer>,
    pub lexical: Arc<LexicalModel>,
    pub tokenizer: Arc<KerasTokenizer>,
    pub sequence: Arc<LstmClassifier>,
}

pub fn read_artifact(path: &Path) -> Result<String, ModelError> {
    std::fs::read_to_string(path).map_err(|source| ModelError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Loads all four artifacts and checks that each pair agrees on its shared
/// dimension.
pub fn load_models(config: &ModelsConfig) -> Result<LoadedModels, ModelError> {
    let load = |file: &str| {
        let path = config.artifact_path(file);
        read_artifact(&path).map(|json| (json, path.display().to_string()))
    };

    let (json, origin) = load(&config.lexical_vectorizer)?;
    let vectorizer = TfidfVectorizer::from_json(&json, &origin)?;

    let (json, origin) = load(&config.lexical_classifier)?;
    let lexical = LexicalModel::from_json(&json, &origin)?;

    if let Some(columns) = lexical.feature_count() {
        if columns != vectorizer.feature_count() {
            return Err(ModelError::Shape(format!(
                "lexical classifier expects {} features, vectorizer produces {}",
                columns,
                vectorizer.feature_count()
            )));
        }
    }

    let (json, origin) = load(&config.sequence_tokenizer)?;
    let tokenizer = KerasTokenizer::from_json(&json, &origin)?;

    let (json, origin) = load(&config.sequence_classifier)?;
    let sequence = LstmClassifier::from_json(&json, &origin)?;

    if tokenizer.max_id() as usize >= sequence.vocab_size() {
        return Err(ModelError::Shape(format!(
            "tokenizer emits ids up to {}, embedding has {} rows",
            tokenizer.max_id(),
            sequence.vocab_size()
        )));
    }

    info!(
        features = vectorizer.feature_count(),
        vocab_size = sequence.vocab_size(),
        lstm_units = sequence.units(),
        "Model artifacts loaded"
    );

    Ok(LoadedModels {
        vectorizer: Arc::new(vectorizer),
        lexical: Arc::new(lexical),
        tokenizer: Arc::new(tokenizer),
        sequence: Arc::new(sequence),
    })
}
