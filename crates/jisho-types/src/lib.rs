pub mod types;

pub use types::{DictionaryEntry, Meaning, SearchQuery};
