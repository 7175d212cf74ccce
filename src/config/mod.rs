#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_PATH: &str = "./.rocket-cart/storage.json";
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::{DEFAULT_API_URL, DEFAULT_STORAGE_PATH, MAX_TIMEOUT_SECONDS};
    use crate::core::cart_store::CART_STORAGE_KEY;
    use crate::core::{ConfigProvider, Locale};
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Args;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, Clone, Serialize, Deserialize, Args)]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_API_URL, help = "Base URL of the shop API")]
        pub api_url: String,

        #[arg(long, default_value = DEFAULT_STORAGE_PATH, help = "JSON file used as local storage")]
        pub storage_path: String,

        #[arg(long, default_value = CART_STORAGE_KEY, help = "Key the cart is stored under")]
        pub storage_key: String,

        #[arg(long, value_enum, default_value_t = Locale::En)]
        pub locale: Locale,

        #[arg(long, help = "Abort API requests after this many seconds")]
        pub timeout_seconds: Option<u64>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn api_base_url(&self) -> &str {
            &self.api_url
        }

        fn storage_path(&self) -> &str {
            &self.storage_path
        }

        fn storage_key(&self) -> &str {
            &self.storage_key
        }

        fn locale(&self) -> Locale {
            self.locale
        }

        fn request_timeout(&self) -> Option<Duration> {
            self.timeout_seconds.map(Duration::from_secs)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_url("api_url", &self.api_url)?;
            validation::validate_path("storage_path", &self.storage_path)?;
            validation::validate_non_empty_string("storage_key", &self.storage_key)?;
            if let Some(timeout) = self.timeout_seconds {
                validation::validate_range("timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
            }
            Ok(())
        }
    }

}
