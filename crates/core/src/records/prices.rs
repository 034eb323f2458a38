//! Price Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::definitions::{RecurringInterval, SeatTiers};

/// A remote price, tagged by amount type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "amount_type", rename_all = "snake_case")]
pub enum PriceRecord {
    /// Free of charge
    Free(FreePrice),

    /// Fixed amount
    Fixed(FixedPrice),

    /// Pay what you want
    Custom(CustomPrice),

    /// Usage-based price per meter unit
    MeteredUnit(MeteredUnitPrice),

    /// Tiered price per seat
    SeatBased(SeatBasedPrice),
}

impl PriceRecord {
    /// Fields shared by every amount type.
    pub fn details(&self) -> &PriceDetails {
        match self {
            Self::Free(price) => &price.details,
            Self::Fixed(price) => &price.details,
            Self::Custom(price) => &price.details,
            Self::MeteredUnit(price) => &price.details,
            Self::SeatBased(price) => &price.details,
        }
    }
}

/// Whether a price is charged once or on every interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    /// Charged once
    #[default]
    OneTime,

    /// Charged every interval
    Recurring,
}

impl PriceType {
    /// Price type implied by a product's recurring interval.
    pub fn for_interval(interval: Option<RecurringInterval>) -> Self {
        if interval.is_some() {
            Self::Recurring
        } else {
            Self::OneTime
        }
    }
}

/// Where a price was defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// Part of the product catalog
    #[default]
    Catalog,

    /// Created for a single checkout
    AdHoc,
}

/// Fields shared by every price record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceDetails {
    /// Price identifier
    pub id: String,

    /// One-time or recurring
    #[serde(rename = "type", default)]
    pub price_type: PriceType,

    /// Recurring interval of the price
    #[serde(default)]
    pub recurring_interval: Option<RecurringInterval>,

    /// Whether the price is archived
    #[serde(default)]
    pub is_archived: bool,

    /// Owning product
    pub product_id: String,

    /// Creation time
    pub created_at: Timestamp,

    /// Last modification time
    #[serde(default)]
    pub modified_at: Option<Timestamp>,

    /// Where the price was defined
    #[serde(default)]
    pub source: PriceSource,
}

/// Free price record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreePrice {
    /// Shared price fields
    #[serde(flatten)]
    pub details: PriceDetails,
}

/// Fixed price record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedPrice {
    /// Shared price fields
    #[serde(flatten)]
    pub details: PriceDetails,

    /// Amount in minor units
    pub price_amount: i64,

    /// ISO currency code, lowercase
    pub price_currency: String,
}

/// Custom (pay what you want) price record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPrice {
    /// Shared price fields
    #[serde(flatten)]
    pub details: PriceDetails,

    /// Suggested amount in minor units
    pub preset_amount: Option<i64>,

    /// Lower bound in minor units
    pub minimum_amount: Option<i64>,

    /// Upper bound in minor units
    pub maximum_amount: Option<i64>,

    /// ISO currency code, lowercase
    pub price_currency: String,
}

/// Meter referenced by a metered price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meter {
    /// Meter identifier
    pub id: String,

    /// Meter name
    pub name: String,
}

/// Metered unit price record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeteredUnitPrice {
    /// Shared price fields
    #[serde(flatten)]
    pub details: PriceDetails,

    /// Billing cap in minor units
    pub cap_amount: Option<i64>,

    /// ISO currency code, lowercase
    pub price_currency: String,

    /// Meter summary
    pub meter: Meter,

    /// Meter identifier
    pub meter_id: String,

    /// Price per unit, as a decimal string in minor units
    pub unit_amount: String,
}

/// Seat-based price record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatBasedPrice {
    /// Shared price fields
    #[serde(flatten)]
    pub details: PriceDetails,

    /// ISO currency code, lowercase
    pub price_currency: String,

    /// Seat tiers in minor units
    pub seat_tiers: SeatTiers,
}
