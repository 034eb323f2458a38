//! Benefit Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::metadata::Metadata;

/// A benefit granted by products. Read-only as far as syncing is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    /// Benefit identifier
    pub id: String,

    /// Benefit type, e.g. `custom` or `license_keys`
    #[serde(rename = "type")]
    pub benefit_type: String,

    /// Description shown to customers
    pub description: String,

    /// Owning organization
    pub organization_id: String,

    /// Whether customers can select it
    #[serde(default)]
    pub selectable: bool,

    /// Whether it can be deleted
    #[serde(default)]
    pub deletable: bool,

    /// Creation time
    pub created_at: Timestamp,

    /// Last modification time
    #[serde(default)]
    pub modified_at: Option<Timestamp>,

    /// Benefit metadata
    #[serde(default)]
    pub metadata: Metadata,

    /// Type-specific properties
    #[serde(default)]
    pub properties: serde_json::Value,
}
