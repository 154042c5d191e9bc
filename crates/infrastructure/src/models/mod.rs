mod error;
mod lexical;
mod loader;
mod lstm;
mod sequence_tokenizer;
mod tfidf;

pub use error::ModelError;
pub use lexical::{LexicalModel, LinearModel, MultinomialNb};
pub use loader::{load_models, read_artifact, LoadedModels};
pub use lstm::{DenseLayer, LstmClassifier, LstmLayer};
pub use sequence_tokenizer::KerasTokenizer;
pub use tfidf::{TfidfNorm, TfidfVectorizer};
