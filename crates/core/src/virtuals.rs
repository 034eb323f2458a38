//! Virtual Products
//!
//! Virtual products are defined locally and never pushed. Their records are
//! synthesized here in the same shape the remote API would return, so the
//! generated catalog module treats them like any other product.

use jiff::Timestamp;
use uuid::Uuid;

use crate::{
    amounts::DEFAULT_CURRENCY,
    definitions::{PriceDefinition, ProductDefinition},
    records::{
        CustomPrice, FixedPrice, FreePrice, MediaRecord, Meter, MeteredUnitPrice, PriceDetails,
        PriceRecord, PriceSource, PriceType, ProductRecord, SeatBasedPrice,
    },
};

/// Name given to the placeholder meter of metered prices.
pub const PLACEHOLDER_METER_NAME: &str = "usage base";

/// Unit amount given to metered prices.
pub const PLACEHOLDER_UNIT_AMOUNT: &str = "1";

const MEDIA_SERVICE: &str = "product_media";

/// Builds the record of a virtual product, using `id` as its identifier.
///
/// No I/O is performed; only the generated price and media ids and the
/// creation timestamps vary between calls.
pub fn synthesize_virtual_product(definition: &ProductDefinition, id: &str) -> ProductRecord {
    let now = Timestamp::now();
    let price_type = PriceType::for_interval(definition.recurring_interval);

    ProductRecord {
        id: id.to_string(),
        created_at: now,
        modified_at: None,
        trial_interval: None,
        trial_interval_count: None,
        name: definition.name.clone(),
        description: Some(definition.description.clone().unwrap_or_default()),
        recurring_interval: definition.recurring_interval,
        recurring_interval_count: definition.recurring_interval_count,
        is_recurring: definition.recurring_interval.is_some(),
        is_archived: false,
        organization_id: String::new(),
        metadata: definition.metadata.clone(),
        prices: definition
            .prices
            .iter()
            .map(|price| synthesize_price(price, id, price_type, now))
            .collect(),
        benefits: Vec::new(),
        medias: definition
            .medias
            .iter()
            .map(|path| placeholder_media(path, now))
            .collect(),
        attached_custom_fields: Vec::new(),
    }
}

fn synthesize_price(
    price: &PriceDefinition,
    product_id: &str,
    price_type: PriceType,
    now: Timestamp,
) -> PriceRecord {
    let details = PriceDetails {
        id: generate_id(),
        price_type,
        recurring_interval: None,
        is_archived: false,
        product_id: product_id.to_string(),
        created_at: now,
        modified_at: None,
        source: PriceSource::Catalog,
    };

    match price {
        PriceDefinition::Free => PriceRecord::Free(FreePrice { details }),
        PriceDefinition::Fixed {
            price_amount,
            price_currency,
        } => PriceRecord::Fixed(FixedPrice {
            details,
            price_amount: *price_amount,
            price_currency: currency(price_currency.as_deref()),
        }),
        PriceDefinition::Custom {
            preset_amount,
            minimum_amount,
            maximum_amount,
            price_currency,
        } => PriceRecord::Custom(CustomPrice {
            details,
            preset_amount: Some(preset_amount.unwrap_or(0)),
            minimum_amount: Some(minimum_amount.unwrap_or(0)),
            maximum_amount: Some(maximum_amount.unwrap_or(0)),
            price_currency: currency(price_currency.as_deref()),
        }),
        // The meter is a placeholder until meters are modelled locally.
        PriceDefinition::MeteredUnit {
            cap_amount,
            price_currency,
            ..
        } => PriceRecord::MeteredUnit(MeteredUnitPrice {
            details,
            cap_amount: *cap_amount,
            price_currency: currency(price_currency.as_deref()),
            meter: Meter {
                id: generate_id(),
                name: PLACEHOLDER_METER_NAME.to_string(),
            },
            meter_id: generate_id(),
            unit_amount: PLACEHOLDER_UNIT_AMOUNT.to_string(),
        }),
        PriceDefinition::SeatBased {
            seat_tiers,
            price_currency,
        } => PriceRecord::SeatBased(SeatBasedPrice {
            details,
            price_currency: currency(price_currency.as_deref()),
            seat_tiers: seat_tiers.clone(),
        }),
    }
}

// Media references are kept as the storage path until media files are modelled locally.
fn placeholder_media(path: &str, now: Timestamp) -> MediaRecord {
    MediaRecord {
        id: generate_id(),
        organization_id: String::new(),
        name: String::new(),
        path: path.to_string(),
        mime_type: String::new(),
        size: 0,
        storage_version: None,
        checksum_etag: None,
        checksum_sha256_base64: None,
        checksum_sha256_hex: None,
        last_modified_at: None,
        version: None,
        service: MEDIA_SERVICE.to_string(),
        is_uploaded: false,
        created_at: now,
        size_readable: "0 kb".to_string(),
        public_url: String::new(),
    }
}

fn currency(currency: Option<&str>) -> String {
    currency.unwrap_or(DEFAULT_CURRENCY).to_string()
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;
    use testresult::TestResult;

    use crate::{
        definitions::{PriceInput, ProductInput, RecurringInterval, SeatTier, SeatTiers},
        metadata::MetadataValue,
    };

    use super::*;

    fn definition(
        recurring_interval: Option<RecurringInterval>,
        prices: Vec<PriceInput>,
    ) -> Result<ProductDefinition, crate::definitions::DefinitionError> {
        ProductInput {
            key: "v1".to_string(),
            name: "Virtual Plan".to_string(),
            recurring_interval,
            prices,
            is_virtual: true,
            id: Some("vid-1".to_string()),
            ..ProductInput::default()
        }
        .into_definition()
    }

    #[test]
    fn free_one_time_product() -> TestResult {
        let definition = definition(None, vec![PriceInput::Free])?;

        let record = synthesize_virtual_product(&definition, "vid-1");

        assert_eq!(record.id, "vid-1");
        assert_eq!(record.description.as_deref(), Some(""));
        assert_eq!(record.key(), Some("v1"));
        assert!(!record.is_recurring);
        assert!(!record.is_archived);
        assert!(record.modified_at.is_none());
        assert!(record.benefits.is_empty());
        assert!(record.attached_custom_fields.is_empty());

        let price = record.prices.first().ok_or("expected a price")?;

        assert!(
            matches!(price, PriceRecord::Free(_)),
            "expected free price, got {price:?}"
        );
        assert_eq!(price.details().price_type, PriceType::OneTime);
        assert_eq!(price.details().product_id, "vid-1");
        assert_eq!(price.details().source, PriceSource::Catalog);
        assert!(!price.details().is_archived);
        assert!(price.details().modified_at.is_none());
        assert!(price.details().recurring_interval.is_none());

        Ok(())
    }

    #[test]
    fn recurring_products_get_recurring_prices() -> TestResult {
        let definition = definition(Some(RecurringInterval::Month), vec![PriceInput::Free])?;

        let record = synthesize_virtual_product(&definition, "vid-1");
        let price = record.prices.first().ok_or("expected a price")?;

        assert!(record.is_recurring);
        assert_eq!(price.details().price_type, PriceType::Recurring);

        Ok(())
    }

    #[test]
    fn fixed_prices_default_to_usd() -> TestResult {
        let definition = definition(
            None,
            vec![PriceInput::Fixed {
                price_amount: "9.99".parse()?,
                price_currency: None,
            }],
        )?;

        let record = synthesize_virtual_product(&definition, "vid-1");
        let price = record.prices.first().ok_or("expected a price")?;

        assert!(
            matches!(price, PriceRecord::Fixed(fixed) if fixed.price_amount == 999 && fixed.price_currency == "usd"),
            "expected fixed usd price, got {price:?}"
        );

        Ok(())
    }

    #[test]
    fn custom_prices_default_missing_amounts_to_zero() -> TestResult {
        let definition = definition(
            None,
            vec![PriceInput::Custom {
                preset_amount: None,
                minimum_amount: Some("5".parse()?),
                maximum_amount: None,
                price_currency: Some("eur".to_string()),
            }],
        )?;

        let record = synthesize_virtual_product(&definition, "vid-1");

        let Some(PriceRecord::Custom(custom)) = record.prices.first() else {
            return Err("expected custom price".into());
        };

        assert_eq!(custom.preset_amount, Some(0));
        assert_eq!(custom.minimum_amount, Some(500));
        assert_eq!(custom.maximum_amount, Some(0));
        assert_eq!(custom.price_currency, "eur");

        Ok(())
    }

    #[test]
    fn metered_prices_get_a_placeholder_meter() -> TestResult {
        let definition = definition(
            Some(RecurringInterval::Month),
            vec![PriceInput::MeteredUnit {
                meter_id: None,
                unit_amount: None,
                cap_amount: None,
                price_currency: None,
            }],
        )?;

        let record = synthesize_virtual_product(&definition, "vid-1");

        let Some(PriceRecord::MeteredUnit(metered)) = record.prices.first() else {
            return Err("expected metered price".into());
        };

        assert_eq!(metered.cap_amount, None);
        assert_eq!(metered.meter.name, PLACEHOLDER_METER_NAME);
        assert_eq!(metered.unit_amount, PLACEHOLDER_UNIT_AMOUNT);
        assert_ne!(metered.meter.id, metered.meter_id);

        Ok(())
    }

    #[test]
    fn seat_tiers_are_copied() -> TestResult {
        let seat_tiers = SeatTiers {
            tiers: vec![
                SeatTier {
                    min_seats: 1,
                    max_seats: Some(10),
                    price_per_seat: 1000,
                },
                SeatTier {
                    min_seats: 11,
                    max_seats: None,
                    price_per_seat: 800,
                },
            ],
        };

        let definition = definition(
            None,
            vec![PriceInput::SeatBased {
                seat_tiers: seat_tiers.clone(),
                price_currency: None,
            }],
        )?;

        let record = synthesize_virtual_product(&definition, "vid-1");

        let Some(PriceRecord::SeatBased(seats)) = record.prices.first() else {
            return Err("expected seat-based price".into());
        };

        assert_eq!(seats.seat_tiers, seat_tiers);
        assert_eq!(seats.price_currency, "usd");

        Ok(())
    }

    #[test]
    fn every_price_gets_a_unique_id() -> TestResult {
        let definition = definition(
            None,
            vec![PriceInput::Free, PriceInput::Free, PriceInput::Free],
        )?;

        let record = synthesize_virtual_product(&definition, "vid-1");

        let ids: FxHashSet<&str> = record
            .prices
            .iter()
            .map(|price| price.details().id.as_str())
            .collect();

        assert_eq!(ids.len(), 3);

        Ok(())
    }

    #[test]
    fn media_references_become_placeholder_media() -> TestResult {
        let mut definition = definition(None, vec![PriceInput::Free])?;
        definition.medias = vec!["file_123".to_string()];
        definition
            .metadata
            .insert("tier".to_string(), MetadataValue::from("gold"));

        let record = synthesize_virtual_product(&definition, "vid-1");
        let media = record.medias.first().ok_or("expected a media record")?;

        assert_eq!(media.path, "file_123");
        assert_eq!(media.size, 0);
        assert_eq!(media.service, "product_media");
        assert!(!media.is_uploaded);
        assert_eq!(
            record.metadata.get("tier"),
            Some(&MetadataValue::from("gold"))
        );

        Ok(())
    }
}
