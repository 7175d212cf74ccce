use thiserror::Error;

use crate::domain::model::ProductId;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog returned product {received} when {requested} was requested")]
    ProductMismatch {
        requested: ProductId,
        received: ProductId,
    },

    #[error("Cart contains product {id} more than once")]
    DuplicateProduct { id: ProductId },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CartError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CartError::ApiError(_)
            | CartError::UnexpectedStatus { .. }
            | CartError::ProductMismatch { .. } => {
                "Check that the product API is reachable and the base URL is correct"
            }
            CartError::IoError(_) => "Check that the storage path exists and is writable",
            CartError::SerializationError(_) | CartError::DuplicateProduct { .. } => {
                "The stored cart is unreadable; it will be reset on the next change"
            }
            CartError::ConfigError { .. } | CartError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CartError::ConfigError { .. } | CartError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
