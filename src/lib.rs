pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::Cli, CliConfig};

pub use adapters::{ApiClient, ConsoleNotifier, JsonFileStorage, MemoryStorage, TracingNotifier};
pub use config::toml_config::TomlConfig;
pub use core::cart_store::{CartStore, Outcome, StoreSettings, CART_STORAGE_KEY};
pub use domain::model::{Cart, Product, ProductId, Stock, UpdateProductAmount};
pub use domain::notice::{Locale, NoticeKind};
pub use utils::error::{CartError, Result};
