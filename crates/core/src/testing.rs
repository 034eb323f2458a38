//! Shared builders for unit tests.

use jiff::Timestamp;

use crate::{
    definitions::{PriceDefinition, PriceInput, ProductDefinition, ProductInput},
    metadata::{KEY, Metadata, MetadataValue},
    records::{FixedPrice, PriceDetails, PriceRecord, PriceSource, PriceType, ProductRecord},
};

/// A remote one-time product carrying `key` in its metadata.
pub(crate) fn remote_product(id: &str, key: &str) -> ProductRecord {
    let mut metadata = Metadata::new();
    metadata.insert(KEY.to_string(), MetadataValue::from(key));

    ProductRecord {
        id: id.to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        modified_at: None,
        trial_interval: None,
        trial_interval_count: None,
        name: format!("Product {key}"),
        description: None,
        recurring_interval: None,
        recurring_interval_count: None,
        is_recurring: false,
        is_archived: false,
        organization_id: "org_1".to_string(),
        metadata,
        prices: vec![PriceRecord::Fixed(FixedPrice {
            details: PriceDetails {
                id: format!("price_{id}"),
                price_type: PriceType::OneTime,
                recurring_interval: None,
                is_archived: false,
                product_id: id.to_string(),
                created_at: Timestamp::UNIX_EPOCH,
                modified_at: None,
                source: PriceSource::Catalog,
            },
            price_amount: 1000,
            price_currency: "usd".to_string(),
        })],
        benefits: Vec::new(),
        medias: Vec::new(),
        attached_custom_fields: Vec::new(),
    }
}

/// A free, non-virtual definition.
pub(crate) fn definition(key: &str) -> ProductDefinition {
    ProductDefinition {
        name: format!("Product {key}"),
        description: None,
        recurring_interval: None,
        recurring_interval_count: None,
        prices: vec![PriceDefinition::Free],
        medias: Vec::new(),
        metadata: Metadata::from([(KEY.to_string(), MetadataValue::from(key))]),
        virtual_id: None,
    }
}

/// A free virtual definition with record id `id`.
pub(crate) fn virtual_definition(key: &str, id: &str) -> ProductDefinition {
    ProductDefinition {
        virtual_id: Some(id.to_string()),
        ..definition(key)
    }
}

/// An authored free product.
pub(crate) fn input(key: &str) -> ProductInput {
    ProductInput {
        key: key.to_string(),
        name: format!("Product {key}"),
        prices: vec![PriceInput::Free],
        ..ProductInput::default()
    }
}
