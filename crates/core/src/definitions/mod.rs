//! Product Definitions
//!
//! A definition is the locally-authored description of a product. Authors
//! write a [`ProductInput`] with prices in major units; the store converts it
//! into a [`ProductDefinition`] carrying minor units, which is the payload sent
//! to the remote API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metadata::{self, Metadata};

mod inputs;
mod prices;

pub use inputs::{PriceInput, ProductInput};
pub use prices::{PriceDefinition, SeatTier, SeatTiers};

/// Billing interval of a recurring product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurringInterval {
    /// Daily
    Day,

    /// Weekly
    Week,

    /// Monthly
    Month,

    /// Yearly
    Year,
}

/// Product Definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDefinition {
    /// Display name
    pub name: String,

    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Recurring interval, `None` for one-time products
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<RecurringInterval>,

    /// Number of intervals between charges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_interval_count: Option<u32>,

    /// Prices in minor units, in authoring order
    pub prices: Vec<PriceDefinition>,

    /// Media file references
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub medias: Vec<String>,

    /// Metadata, including the product key
    pub metadata: Metadata,

    /// Local record id for virtual products; virtual products are never pushed
    #[serde(skip)]
    pub virtual_id: Option<String>,
}

impl ProductDefinition {
    /// Stable key used to match this definition to a remote product.
    pub fn key(&self) -> Option<&str> {
        metadata::key_of(&self.metadata)
    }

    /// Whether this definition is synthesized locally instead of pushed.
    pub fn is_virtual(&self) -> bool {
        self.virtual_id.is_some()
    }
}

/// Errors raised while defining products.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Another product already uses this key.
    #[error("duplicate product key '{key}'")]
    DuplicateKey {
        /// The repeated key
        key: String,
    },

    /// A virtual product was defined without an id.
    #[error("virtual product {product} must declare an 'id'")]
    MissingVirtualId {
        /// Product name
        product: String,
    },

    /// A monetary amount cannot be represented in minor units.
    #[error("amount {amount} in product {product} is out of range")]
    AmountOutOfRange {
        /// Product name
        product: String,

        /// The offending major-unit amount
        amount: Decimal,
    },
}
