//! Product Metadata

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata entry holding the stable key that joins definitions to remote products.
pub const KEY: &str = "key";

/// Free-form product metadata, ordered by key.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A single metadata value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Boolean value
    Boolean(bool),

    /// Integer value
    Integer(i64),

    /// Floating point value
    Float(f64),

    /// String value
    String(String),
}

impl MetadataValue {
    /// Returns the string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            Self::Boolean(_) | Self::Integer(_) | Self::Float(_) => None,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Returns the non-empty string stored under [`KEY`], if any.
pub fn key_of(metadata: &Metadata) -> Option<&str> {
    metadata
        .get(KEY)
        .and_then(MetadataValue::as_str)
        .filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn key_of_reads_string_keys() {
        let metadata = Metadata::from([(KEY.to_string(), MetadataValue::from("pro"))]);

        assert_eq!(key_of(&metadata), Some("pro"));
    }

    #[test]
    fn key_of_ignores_empty_and_non_string_keys() {
        let empty = Metadata::from([(KEY.to_string(), MetadataValue::from(""))]);
        let numeric = Metadata::from([(KEY.to_string(), MetadataValue::from(7_i64))]);

        assert_eq!(key_of(&empty), None);
        assert_eq!(key_of(&numeric), None);
        assert_eq!(key_of(&Metadata::new()), None);
    }

    #[test]
    fn values_deserialize_to_the_narrowest_variant() -> TestResult {
        let metadata: Metadata = serde_json::from_str(
            r#"{"key": "pro", "maxUsers": 10, "ratio": 0.5, "beta": true}"#,
        )?;

        assert_eq!(metadata.get("key"), Some(&MetadataValue::from("pro")));
        assert_eq!(metadata.get("maxUsers"), Some(&MetadataValue::Integer(10)));
        assert_eq!(metadata.get("ratio"), Some(&MetadataValue::Float(0.5)));
        assert_eq!(metadata.get("beta"), Some(&MetadataValue::Boolean(true)));

        Ok(())
    }
}
