mod error;

pub use error::FetchError;

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use tracing::{debug, warn};

use crate::model::{ErrorBody, SearchQuery, SearchRequest, SearchResponse};

/// Anything that can answer a lyrics query.
#[async_trait]
pub trait LyricsBackend: Send + Sync {
    async fn query_lyrics(&self, query: &SearchQuery) -> Result<SearchResponse, FetchError>;
}

pub struct ApiService {
    client: Client,
    endpoint: Url,
}

impl ApiService {
    pub fn new(endpoint: Url) -> color_eyre::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LyricsBackend for ApiService {
    async fn query_lyrics(&self, query: &SearchQuery) -> Result<SearchResponse, FetchError> {
        debug!("POST {} query={:?}", self.endpoint, query.as_str());

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .json(&SearchRequest::from(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .bytes()
                .await
                .ok()
                .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok());
            match detail {
                Some(ErrorBody { error }) => warn!("Server rejected query ({}): {}", status, error),
                None => warn!("Server rejected query ({})", status),
            }
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;
        debug!("Received {} results", parsed.results.len());
        Ok(parsed)
    }
}
