//! Price Definitions

use serde::{Deserialize, Serialize};

/// A price as sent to the remote API, amounts in minor units.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "amount_type", rename_all = "snake_case")]
pub enum PriceDefinition {
    /// Free of charge
    Free,

    /// Fixed amount
    Fixed {
        /// Amount in minor units
        price_amount: i64,

        /// ISO currency code, lowercase
        #[serde(skip_serializing_if = "Option::is_none")]
        price_currency: Option<String>,
    },

    /// Pay what you want
    Custom {
        /// Suggested amount in minor units
        #[serde(skip_serializing_if = "Option::is_none")]
        preset_amount: Option<i64>,

        /// Lower bound in minor units
        #[serde(skip_serializing_if = "Option::is_none")]
        minimum_amount: Option<i64>,

        /// Upper bound in minor units
        #[serde(skip_serializing_if = "Option::is_none")]
        maximum_amount: Option<i64>,

        /// ISO currency code, lowercase
        #[serde(skip_serializing_if = "Option::is_none")]
        price_currency: Option<String>,
    },

    /// Usage-based price per meter unit
    MeteredUnit {
        /// Remote meter id
        #[serde(skip_serializing_if = "Option::is_none")]
        meter_id: Option<String>,

        /// Price per unit, as a decimal string in minor units
        #[serde(skip_serializing_if = "Option::is_none")]
        unit_amount: Option<String>,

        /// Billing cap in minor units
        #[serde(skip_serializing_if = "Option::is_none")]
        cap_amount: Option<i64>,

        /// ISO currency code, lowercase
        #[serde(skip_serializing_if = "Option::is_none")]
        price_currency: Option<String>,
    },

    /// Tiered price per seat
    SeatBased {
        /// Seat tiers, minor units
        seat_tiers: SeatTiers,

        /// ISO currency code, lowercase
        #[serde(skip_serializing_if = "Option::is_none")]
        price_currency: Option<String>,
    },
}

/// Seat tier table of a seat-based price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatTiers {
    /// Tiers ordered by seat count
    pub tiers: Vec<SeatTier>,
}

/// A single seat tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatTier {
    /// First seat count covered by this tier
    pub min_seats: u32,

    /// Last seat count covered by this tier, open-ended when `None`
    #[serde(default)]
    pub max_seats: Option<u32>,

    /// Price per seat in minor units
    pub price_per_seat: i64,
}
