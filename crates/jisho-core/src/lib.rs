pub mod cache;
pub mod coordinator;
pub mod dictionary;
pub mod error;

pub use cache::CacheStore;
pub use coordinator::{SearchCoordinator, cache_key};
pub use dictionary::{Dictionary, DictionaryMetadata};
pub use error::{CacheError, FetchError, SearchError};
