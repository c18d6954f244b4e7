/// Failure to retrieve a result page from the remote source
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid source URL: {0}")]
    InvalidUrl(String),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),

    #[error("Cache command failed: {0}")]
    Command(String),

    #[error("Cache did not answer within {0:?}")]
    Timeout(std::time::Duration),
}

/// Per-request search failure
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("upstream fetch failed: {0}")]
    Fetch(#[from] FetchError),
}
