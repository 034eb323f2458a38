//! Product Records
//!
//! Records are the authoritative, server-shaped products: either returned by
//! the remote API or synthesized locally for virtual definitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    definitions::RecurringInterval,
    metadata::{self, Metadata},
};

mod benefits;
mod media;
mod prices;

pub use benefits::Benefit;
pub use media::MediaRecord;
pub use prices::{
    CustomPrice, FixedPrice, FreePrice, Meter, MeteredUnitPrice, PriceDetails, PriceRecord,
    PriceSource, PriceType, SeatBasedPrice,
};

/// Product Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Record identifier
    pub id: String,

    /// Creation time
    pub created_at: Timestamp,

    /// Last modification time
    pub modified_at: Option<Timestamp>,

    /// Trial interval
    #[serde(default)]
    pub trial_interval: Option<RecurringInterval>,

    /// Trial interval count
    #[serde(default)]
    pub trial_interval_count: Option<u32>,

    /// Display name
    pub name: String,

    /// Description
    pub description: Option<String>,

    /// Recurring interval, `None` for one-time products
    pub recurring_interval: Option<RecurringInterval>,

    /// Number of intervals between charges
    #[serde(default)]
    pub recurring_interval_count: Option<u32>,

    /// Whether the product bills on a recurring interval
    pub is_recurring: bool,

    /// Whether the product is archived
    pub is_archived: bool,

    /// Owning organization
    pub organization_id: String,

    /// Metadata, including the product key
    #[serde(default)]
    pub metadata: Metadata,

    /// Prices
    pub prices: Vec<PriceRecord>,

    /// Granted benefits
    #[serde(default)]
    pub benefits: Vec<Benefit>,

    /// Product media
    #[serde(default)]
    pub medias: Vec<MediaRecord>,

    /// Custom checkout fields attached to the product
    #[serde(default)]
    pub attached_custom_fields: Vec<serde_json::Value>,
}

impl ProductRecord {
    /// Stable key stored in the record's metadata.
    pub fn key(&self) -> Option<&str> {
        metadata::key_of(&self.metadata)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const REMOTE_PRODUCT: &str = r#"{
        "id": "prod_1",
        "created_at": "2025-03-01T09:30:00.123456Z",
        "modified_at": null,
        "trial_interval": null,
        "trial_interval_count": null,
        "name": "Pro Plan",
        "description": "Everything in Pro",
        "recurring_interval": "month",
        "recurring_interval_count": 1,
        "is_recurring": true,
        "is_archived": false,
        "organization_id": "org_1",
        "metadata": { "key": "pro", "seats": 5 },
        "prices": [
            {
                "id": "price_1",
                "type": "recurring",
                "recurring_interval": "month",
                "amount_type": "fixed",
                "price_amount": 1999,
                "price_currency": "usd",
                "is_archived": false,
                "product_id": "prod_1",
                "created_at": "2025-03-01T09:30:00Z",
                "modified_at": null,
                "source": "catalog"
            }
        ],
        "benefits": [],
        "medias": [],
        "attached_custom_fields": [],
        "unknown_field": "ignored"
    }"#;

    #[test]
    fn remote_products_deserialize() -> TestResult {
        let record: ProductRecord = serde_json::from_str(REMOTE_PRODUCT)?;

        assert_eq!(record.id, "prod_1");
        assert_eq!(record.key(), Some("pro"));
        assert_eq!(record.recurring_interval, Some(RecurringInterval::Month));
        assert_eq!(record.created_at, "2025-03-01T09:30:00.123456Z".parse()?);

        let price = record.prices.first().ok_or("expected a price")?;

        assert!(
            matches!(price, PriceRecord::Fixed(fixed) if fixed.price_amount == 1999),
            "expected fixed price, got {price:?}"
        );
        assert_eq!(price.details().product_id, "prod_1");

        Ok(())
    }

    #[test]
    fn records_survive_a_json_round_trip() -> TestResult {
        let record: ProductRecord = serde_json::from_str(REMOTE_PRODUCT)?;

        let json = serde_json::to_string(&record)?;
        let reparsed: ProductRecord = serde_json::from_str(&json)?;

        assert_eq!(reparsed, record);

        Ok(())
    }
}
