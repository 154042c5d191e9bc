use judol_filter_application::services::normalization::{
    IndonesianStemmer, NormalizationResources,
};
use judol_filter_domain::config::ResourcesConfig;
use std::path::Path;
use tracing::info;

use super::error::ResourceError;

/// Everything the normalization pipeline needs from disk.
pub struct LoadedResources {
    pub resources: NormalizationResources,
    pub stemmer: IndonesianStemmer,
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, ResourceError> {
    std::fs::read(path).map_err(|source| ResourceError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Latin-1 maps each byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Parses `informal,canonical` lines. Extra columns are ignored, blank lines
/// skipped, and a later key overwrites an earlier one. A field may be wrapped
/// in double quotes to carry commas, with `""` standing for a literal quote.
/// Quoted fields never span lines.
pub fn parse_dictionary(
    contents: &str,
    origin: &str,
) -> Result<Vec<(String, String)>, ResourceError> {
    let mut pairs = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut columns = split_csv_line(line).into_iter();
        match (columns.next(), columns.next()) {
            (Some(key), Some(value)) => pairs.push((key, value)),
            _ => {
                return Err(ResourceError::MalformedDictionaryLine {
                    path: origin.to_string(),
                    line: idx + 1,
                })
            }
        }
    }
    Ok(pairs)
}

fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' if quoted => quoted = false,
            '"' if field.is_empty() => quoted = true,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

pub fn load_dictionary(path: &Path) -> Result<Vec<(String, String)>, ResourceError> {
    let contents = decode_latin1(&read_bytes(path)?);
    parse_dictionary(&contents, &path.display().to_string())
}

/// Whitespace-separated word list.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, ResourceError> {
    let contents = String::from_utf8_lossy(&read_bytes(path)?).into_owned();
    Ok(contents.split_whitespace().map(str::to_string).collect())
}

pub fn load_root_words(path: &Path) -> Result<Vec<String>, ResourceError> {
    Ok(load_word_list(path)?
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect())
}

pub fn load_normalization_resources(
    config: &ResourcesConfig,
) -> Result<LoadedResources, ResourceError> {
    let dictionary = load_dictionary(Path::new(&config.dictionary_path))?;
    let supplementary = load_word_list(Path::new(&config.stopwords_path))?;

    let base: Vec<String> = match &config.base_stopwords_path {
        Some(path) => load_word_list(Path::new(path))?,
        None => NormalizationResources::default_base_stopwords().collect(),
    };

    let stemmer = match &config.root_words_path {
        Some(path) => IndonesianStemmer::with_root_words(load_root_words(Path::new(path))?),
        None => IndonesianStemmer::new(),
    };

    let resources = NormalizationResources::build(dictionary, base, supplementary);

    info!(
        dictionary_entries = resources.dictionary_len(),
        stopwords = resources.stopword_count(),
        root_words = config.root_words_path.is_some(),
        "Normalization resources loaded"
    );

    Ok(LoadedResources { resources, stemmer })
}
