pub mod dictionary;
pub mod extractor;
pub mod fetcher;
pub mod reading;

#[cfg(test)]
mod fixtures;

pub use dictionary::JishoDictionary;
pub use extractor::{Extraction, extract, extract_entries};
pub use fetcher::{JishoFetcher, RawDocument};
pub use reading::reconstruct_reading;
