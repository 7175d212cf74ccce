use crate::domain::model::{Product, ProductId, Stock};
use crate::domain::notice::{Locale, NoticeKind};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// String-keyed durable store, the shape of browser `localStorage`.
pub trait KeyValueStore: Send + Sync {
    fn get_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait StockOracle: Send + Sync {
    async fn stock(&self, product_id: ProductId) -> Result<Stock>;
}

#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn product(&self, product_id: ProductId) -> Result<Product>;
}

pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn storage_path(&self) -> &str;
    fn storage_key(&self) -> &str;
    fn locale(&self) -> Locale;
    fn request_timeout(&self) -> Option<Duration>;
}
