use crate::core::{ConfigProvider, Product, ProductCatalog, ProductId, Stock, StockOracle};
use crate::utils::error::{CartError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Client for the shop API: `stock/{id}` and `products/{id}` under one base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| CartError::InvalidConfigValueError {
                field: "api_base_url".to_string(),
                value: base_url.to_string(),
                reason: format!("Invalid URL format: {}", e),
            })?;

        // Url::join drops the last segment unless the path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::with_timeout(config.api_base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, resource: &str, product_id: ProductId) -> Result<Url> {
        self.base_url
            .join(&format!("{}/{}", resource, product_id))
            .map_err(|e| CartError::ConfigError {
                message: format!("Cannot build {} URL: {}", resource, e),
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(CartError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl StockOracle for ApiClient {
    async fn stock(&self, product_id: ProductId) -> Result<Stock> {
        let url = self.endpoint("stock", product_id)?;
        self.get_json(url).await
    }
}

#[async_trait]
impl ProductCatalog for ApiClient {
    async fn product(&self, product_id: ProductId) -> Result<Product> {
        let url = self.endpoint("products", product_id)?;
        self.get_json(url).await
    }
}
