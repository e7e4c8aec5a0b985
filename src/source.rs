//! Upstream catalog source.
//!
//! The [`CatalogSource`] trait is the seam between the service layer and
//! whatever supplies the product list. The production implementation,
//! [`HttpCatalogSource`], performs a single GET against the configured feed
//! URL and decodes the catalog envelope. Tests substitute their own
//! implementations.
//!
//! An empty upstream result (a `204`, or an envelope with no `products`
//! field) is data, not an error: it becomes `Ok(vec![])`. `Err` is reserved
//! for availability and decoding failures, which the HTTP layer maps to
//! client-visible error responses.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::UpstreamConfig;
use crate::models::{CatalogEnvelope, Product};

/// Failure modes of a catalog fetch.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The upstream answered with a non-success status.
    #[error("upstream catalog returned status {status}")]
    Unavailable { status: u16 },
    /// The upstream could not be reached.
    #[error("upstream catalog unreachable: {0}")]
    Transport(String),
    /// The upstream answered but the body was not a valid catalog envelope.
    #[error("invalid catalog payload: {0}")]
    Decode(String),
}

/// Supplies the full unfiltered product list on demand.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product the source knows about.
    ///
    /// Returns `Ok(vec![])` when the source has nothing to offer.
    async fn fetch(&self) -> Result<Vec<Product>, SourceError>;
}

/// Fetches the catalog from an HTTP JSON feed.
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    /// Builds a source from the `[upstream]` configuration section.
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        info!(url = %self.url, "fetching product catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NO_CONTENT {
            warn!("upstream returned no products");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            warn!(status = status.as_u16(), "upstream catalog fetch failed");
            return Err(SourceError::Unavailable {
                status: status.as_u16(),
            });
        }

        let envelope: CatalogEnvelope = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;

        let products = envelope.products.unwrap_or_default();
        info!(count = products.len(), "catalog fetched");
        Ok(products)
    }
}
