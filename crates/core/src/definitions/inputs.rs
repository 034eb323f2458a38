//! Authored Inputs

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    amounts::to_minor_units,
    definitions::{
        DefinitionError, PriceDefinition, ProductDefinition, RecurringInterval, SeatTiers,
    },
    metadata::{KEY, Metadata, MetadataValue},
};

/// A product as written by the catalog author.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductInput {
    /// Stable key matching this product to its remote counterpart
    pub key: String,

    /// Display name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Recurring interval, `None` for one-time products
    #[serde(default)]
    pub recurring_interval: Option<RecurringInterval>,

    /// Number of intervals between charges
    #[serde(default)]
    pub recurring_interval_count: Option<u32>,

    /// Prices, amounts in major units
    pub prices: Vec<PriceInput>,

    /// Media file references
    #[serde(default)]
    pub medias: Vec<String>,

    /// Additional metadata
    #[serde(default)]
    pub metadata: Metadata,

    /// Synthesize this product locally instead of pushing it
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,

    /// Record id of a virtual product
    #[serde(default)]
    pub id: Option<String>,
}

impl ProductInput {
    /// Converts the authored product into a definition, scaling every
    /// monetary amount to minor units and recording the key in metadata.
    ///
    /// # Errors
    ///
    /// Returns an error when a virtual product has no id, or when an amount
    /// does not fit in minor units.
    pub fn into_definition(self) -> Result<ProductDefinition, DefinitionError> {
        let Self {
            key,
            name,
            description,
            recurring_interval,
            recurring_interval_count,
            prices,
            medias,
            mut metadata,
            is_virtual,
            id,
        } = self;

        let virtual_id = match (is_virtual, id) {
            (false, _) => None,
            (true, Some(id)) if !id.is_empty() => Some(id),
            (true, _) => return Err(DefinitionError::MissingVirtualId { product: name }),
        };

        let prices = prices
            .into_iter()
            .map(|price| price.into_definition(&name))
            .collect::<Result<Vec<_>, _>>()?;

        metadata.insert(KEY.to_string(), MetadataValue::String(key));

        Ok(ProductDefinition {
            name,
            description,
            recurring_interval,
            recurring_interval_count,
            prices,
            medias,
            metadata,
            virtual_id,
        })
    }
}

/// A price as written by the catalog author, amounts in major units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "amount_type", rename_all = "snake_case")]
pub enum PriceInput {
    /// Free of charge
    Free,

    /// Fixed amount
    Fixed {
        /// Amount in major units
        price_amount: Decimal,

        /// ISO currency code, lowercase
        #[serde(default)]
        price_currency: Option<String>,
    },

    /// Pay what you want
    Custom {
        /// Suggested amount in major units
        #[serde(default)]
        preset_amount: Option<Decimal>,

        /// Lower bound in major units
        #[serde(default)]
        minimum_amount: Option<Decimal>,

        /// Upper bound in major units
        #[serde(default)]
        maximum_amount: Option<Decimal>,

        /// ISO currency code, lowercase
        #[serde(default)]
        price_currency: Option<String>,
    },

    /// Usage-based price per meter unit
    MeteredUnit {
        /// Remote meter id
        #[serde(default)]
        meter_id: Option<String>,

        /// Price per unit, as a decimal string in minor units
        #[serde(default)]
        unit_amount: Option<String>,

        /// Billing cap, already in minor units
        #[serde(default)]
        cap_amount: Option<i64>,

        /// ISO currency code, lowercase
        #[serde(default)]
        price_currency: Option<String>,
    },

    /// Tiered price per seat, tiers already in minor units
    SeatBased {
        /// Seat tiers
        seat_tiers: SeatTiers,

        /// ISO currency code, lowercase
        #[serde(default)]
        price_currency: Option<String>,
    },
}

impl PriceInput {
    fn into_definition(self, product: &str) -> Result<PriceDefinition, DefinitionError> {
        Ok(match self {
            Self::Free => PriceDefinition::Free,
            Self::Fixed {
                price_amount,
                price_currency,
            } => PriceDefinition::Fixed {
                price_amount: minor_units(product, price_amount)?,
                price_currency,
            },
            Self::Custom {
                preset_amount,
                minimum_amount,
                maximum_amount,
                price_currency,
            } => PriceDefinition::Custom {
                preset_amount: optional_minor_units(product, preset_amount)?,
                minimum_amount: optional_minor_units(product, minimum_amount)?,
                maximum_amount: optional_minor_units(product, maximum_amount)?,
                price_currency,
            },
            Self::MeteredUnit {
                meter_id,
                unit_amount,
                cap_amount,
                price_currency,
            } => PriceDefinition::MeteredUnit {
                meter_id,
                unit_amount,
                cap_amount,
                price_currency,
            },
            Self::SeatBased {
                seat_tiers,
                price_currency,
            } => PriceDefinition::SeatBased {
                seat_tiers,
                price_currency,
            },
        })
    }
}

fn minor_units(product: &str, amount: Decimal) -> Result<i64, DefinitionError> {
    to_minor_units(amount).ok_or_else(|| DefinitionError::AmountOutOfRange {
        product: product.to_string(),
        amount,
    })
}

fn optional_minor_units(
    product: &str,
    amount: Option<Decimal>,
) -> Result<Option<i64>, DefinitionError> {
    amount.map(|amount| minor_units(product, amount)).transpose()
}
