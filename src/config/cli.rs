use super::toml_config::TomlConfig;
use super::CliConfig;
use crate::core::{ConfigProvider, ProductId};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rocket-cart")]
#[command(about = "Manage a persisted shopping cart against a shop API")]
pub struct Cli {
    #[arg(long, global = true, help = "Read settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub options: CliConfig,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CartCommand {
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Remove a product line
    Remove { product_id: ProductId },
    /// Set the quantity of a product line
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Print the current cart
    Show,
}

impl Cli {
    /// Settings from `--config` when given, flags otherwise. Validated either way.
    pub fn resolve_config(&self) -> Result<Box<dyn ConfigProvider>> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(Box::new(config))
            }
            None => {
                self.options.validate()?;
                Ok(Box::new(self.options.clone()))
            }
        }
    }
}
