//! Media Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A product media file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// File identifier
    pub id: String,

    /// Owning organization
    pub organization_id: String,

    /// File name
    pub name: String,

    /// Storage path
    pub path: String,

    /// MIME type
    pub mime_type: String,

    /// Size in bytes
    pub size: u64,

    /// Storage version
    pub storage_version: Option<String>,

    /// `ETag` checksum
    pub checksum_etag: Option<String>,

    /// SHA-256 checksum, base64
    pub checksum_sha256_base64: Option<String>,

    /// SHA-256 checksum, hex
    pub checksum_sha256_hex: Option<String>,

    /// Last modification time of the stored object
    pub last_modified_at: Option<Timestamp>,

    /// File version
    pub version: Option<String>,

    /// Storage service
    pub service: String,

    /// Whether the upload completed
    pub is_uploaded: bool,

    /// Creation time
    pub created_at: Timestamp,

    /// Human readable size
    pub size_readable: String,

    /// Public URL
    pub public_url: String,
}
