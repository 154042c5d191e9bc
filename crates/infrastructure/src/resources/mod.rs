mod error;
mod loader;

pub use error::ResourceError;
pub use loader::{
    load_dictionary, load_normalization_resources, load_root_words, load_word_list,
    parse_dictionary, LoadedResources,
};
