//! Store Configuration
//!
//! Catalogs authored as YAML:
//!
//! ```yaml
//! products:
//!   - key: pro
//!     name: Pro Plan
//!     recurring_interval: month
//!     prices:
//!       - amount_type: fixed
//!         price_amount: 29.99
//! ```

use std::{io, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    definitions::{DefinitionError, ProductInput},
    store::{Catalog, Store},
};

/// Default location of the store configuration.
pub const DEFAULT_CONFIG_PATH: &str = "store.config.yaml";

/// Errors raised while loading a store configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("store configuration not found at {path}")]
    NotFound {
        /// Requested path
        path: String,
    },

    /// The configuration file could not be read.
    #[error("failed to read store configuration: {0}")]
    Io(#[from] io::Error),

    /// The configuration is not a valid catalog document.
    #[error("invalid store configuration: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A product in the configuration was rejected.
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

/// A catalog read from a configuration document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Products, in definition order
    #[serde(default)]
    pub products: Vec<ProductInput>,
}

impl StoreConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] when the document is malformed.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(source)?)
    }

    /// Reads and parses the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when the file is missing, or any read
    /// or parse error.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => ConfigError::NotFound {
                    path: path.display().to_string(),
                },
                _ => ConfigError::Io(source),
            })?;

        let config = Self::from_yaml(&source)?;

        debug!(
            path = %path.display(),
            products = config.products.len(),
            "loaded store configuration"
        );

        Ok(config)
    }
}

impl Catalog for StoreConfig {
    type Error = ConfigError;

    fn register(self, store: &mut Store) -> Result<(), Self::Error> {
        for product in self.products {
            store.define_product(product)?;
        }

        Ok(())
    }
}
