//! HTTP catalog client.

use std::time::Duration;

use async_trait::async_trait;

use crate::{CatalogResponse, CatalogSource, FetchError};

/// Public demo catalog used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Products requested in the single catalog fetch.
pub const DEFAULT_LIMIT: u32 = 100;

/// Builder for [`CatalogClient`].
#[derive(Debug, Clone)]
pub struct CatalogClientBuilder {
    base_url: String,
    limit: u32,
    timeout: Option<Duration>,
}

impl Default for CatalogClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: DEFAULT_LIMIT,
            timeout: None,
        }
    }
}

impl CatalogClientBuilder {
    /// Set the API root the `/products` path is appended to.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the page size requested.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set a request timeout. No timeout applies unless one is set.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CatalogClient, FetchError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(self.base_url));
        }

        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        Ok(CatalogClient {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            limit: self.limit,
        })
    }
}

/// Client for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    limit: u32,
}

impl CatalogClient {
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::default()
    }

    /// URL of the product listing.
    pub fn products_url(&self) -> String {
        format!("{}/products?limit={}", self.base_url, self.limit)
    }

    /// Fetch one page of products.
    pub async fn fetch_page(&self) -> Result<CatalogResponse, FetchError> {
        let response = self.http.get(self.products_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::HttpError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        CatalogResponse::from_slice(&body)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_catalog(&self) -> Result<CatalogResponse, FetchError> {
        self.fetch_page().await
    }

    fn describe(&self) -> String {
        self.products_url()
    }
}
