use super::{DEFAULT_STORAGE_PATH, MAX_TIMEOUT_SECONDS};
use crate::core::cart_store::CART_STORAGE_KEY;
use crate::core::{ConfigProvider, Locale};
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: String,
    #[serde(default = "default_storage_key")]
    pub key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub locale: Locale,
}

fn default_storage_path() -> String {
    DEFAULT_STORAGE_PATH.to_string()
}

fn default_storage_key() -> String {
    CART_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_storage_key(),
        }
    }
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration, expanding `${VAR}` placeholders from the environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CartError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as written so validation can point at them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CartError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;
        validation::validate_path("storage.path", &self.storage.path)?;
        validation::validate_non_empty_string("storage.key", &self.storage.key)?;
        if let Some(timeout) = self.api.timeout_seconds {
            validation::validate_range("api.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn storage_path(&self) -> &str {
        &self.storage.path
    }

    fn storage_key(&self) -> &str {
        &self.storage.key
    }

    fn locale(&self) -> Locale {
        self.notifications.locale
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.api.timeout_seconds.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
base_url = "http://localhost:3333"
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.storage_key(), "@RocketShoes:cart");
        assert_eq!(config.storage_path(), DEFAULT_STORAGE_PATH);
        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
base_url = "https://shop.example.com/api"
timeout_seconds = 10

[storage]
path = "/tmp/cart.json"
key = "shop:cart"

[notifications]
locale = "pt-BR"
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.api_base_url(), "https://shop.example.com/api");
        assert_eq!(config.storage_path(), "/tmp/cart.json");
        assert_eq!(config.storage_key(), "shop:cart");
        assert_eq!(config.locale(), Locale::PtBr);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_env_placeholders_are_substituted() {
        std::env::set_var("ROCKET_CART_TEST_API", "http://10.0.0.5:3333");
        let config = TomlConfig::from_toml_str(
            r#"
[api]
base_url = "${ROCKET_CART_TEST_API}"
"#,
        )
        .unwrap();

        assert_eq!(config.api_base_url(), "http://10.0.0.5:3333");
    }

    #[test]
    fn test_unset_placeholder_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
base_url = "${ROCKET_CART_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();

        assert_eq!(config.api_base_url(), "${ROCKET_CART_SURELY_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_api_section_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[storage]\npath = \"x.json\"\n").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_out_of_range_timeout_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
base_url = "http://localhost:3333"
timeout_seconds = 900
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}
