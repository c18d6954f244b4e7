use jisho_config::source::SourceConfig;
use jisho_core::FetchError;
use jisho_types::SearchQuery;
use reqwest::Url;

/// Body of one fetched search page, not yet parsed
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub url: String,
    pub body: String,
}

/// Retrieves search-result pages from the remote source.
///
/// One request per call: no retries and no timeout beyond what the caller imposes.
#[derive(Clone)]
pub struct JishoFetcher {
    base_url: Url,
    client: reqwest::Client,
}

impl JishoFetcher {
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Transport {
                url: config.base_url.clone(),
                source: Box::new(e),
            })?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/search/<query>?page=<page>`, the query escaped as a single path segment
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("search")
            .push(&query.query);
        url.set_query(Some(&format!("page={}", query.page)));
        Ok(url)
    }

    pub async fn fetch(&self, query: &SearchQuery) -> Result<RawDocument, FetchError> {
        let url = self.search_url(query)?;
        tracing::debug!(%url, "fetching search page");

        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source: Box::new(e),
        };

        let response = self.client.get(url.clone()).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(transport)?;

        Ok(RawDocument {
            url: url.to_string(),
            body,
        })
    }
}
