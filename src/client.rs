//! HTTP client for the ledger API's `/chain` and `/product/{id}` endpoints.

use common::{ChainResponse, ProductHistory, ProductSummary, product_summaries};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, instrument, trace};

use crate::config::ClientConfig;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: Url, status: StatusCode },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ChainClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ChainClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.api_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ClientError::InvalidBaseUrl(config.api_url.clone()))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("chaintrack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Build)?;

        debug!("Ledger API client targeting {}", base_url);
        Ok(Self { http, base_url })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        trace!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ClientError::Transport { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }

    #[instrument(skip(self))]
    pub async fn chain(&self) -> Result<ChainResponse, ClientError> {
        let chain: ChainResponse = self.get(self.endpoint(&["chain"])).await?;
        debug!("Fetched chain with {} blocks", chain.chain.len());
        Ok(chain)
    }

    /// Products on the ledger in first-seen order.
    pub async fn products(&self) -> Result<Vec<ProductSummary>, ClientError> {
        let chain = self.chain().await?;
        let products = product_summaries(&chain);
        info!("Found {} products", products.len());
        Ok(products)
    }

    #[instrument(skip(self))]
    pub async fn product_history(&self, product_id: &str) -> Result<ProductHistory, ClientError> {
        let history: ProductHistory = self.get(self.endpoint(&["product", product_id])).await?;
        debug!("Fetched {} events", history.history.len());
        Ok(history)
    }
}
