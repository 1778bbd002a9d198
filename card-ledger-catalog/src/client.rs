//! HTTP client for the reference card catalog.
//!
//! A thin wrapper over the catalog's search endpoint. Retries and batch
//! orchestration belong to the caller — this client does one request per
//! call and maps HTTP failures to [`CatalogError`].

use tokio::time::Duration;

use crate::error::CatalogError;
use crate::types::{CatalogCard, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.pokemontcg.io/v2";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the card catalog search API.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CatalogClient {
    /// Create a client against the default catalog endpoint.
    pub fn new(api_key: Option<String>) -> Result<Self, CatalogError> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against a custom endpoint (self-hosted mirror,
    /// test server).
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(CatalogError::config("catalog base URL is empty"));
        }
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Search the catalog for cards by name.
    ///
    /// Returns an empty list when nothing matches — only transport and
    /// server problems are errors.
    pub async fn search_cards(&self, name: &str) -> Result<Vec<CatalogCard>, CatalogError> {
        let query = format!("name:\"{}\"", name.replace('"', ""));

        let mut request = self
            .http
            .get(format!("{}/cards", self.base_url))
            .query(&[("q", query.as_str())]);
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let resp = request.send().await?;
        let status = resp.status();
        match status.as_u16() {
            200 => {}
            401 | 403 => return Err(CatalogError::InvalidApiKey),
            429 => return Err(CatalogError::RateLimit),
            code => {
                let message = resp.text().await.unwrap_or_default();
                return Err(CatalogError::ServerError {
                    status: code,
                    message: message.chars().take(200).collect(),
                });
            }
        }

        let text = resp.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&text)?;
        log::debug!("catalog search \"{}\": {} candidates", name, parsed.data.len());
        Ok(parsed.data)
    }
}
