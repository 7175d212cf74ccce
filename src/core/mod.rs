pub mod cart_store;

pub use crate::domain::model::{Cart, Product, ProductId, Stock, UpdateProductAmount};
pub use crate::domain::notice::{Locale, NoticeKind};
pub use crate::domain::ports::{
    ConfigProvider, KeyValueStore, Notifier, ProductCatalog, StockOracle,
};
pub use crate::utils::error::Result;
