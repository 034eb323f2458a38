//! Reconciler
//!
//! Walks local definitions in order and brings the remote catalog in line
//! with them: virtual definitions are synthesized, definitions whose key is
//! already present remotely are updated, and everything else is created.

use thiserror::Error;
use tracing::info;

use crate::{
    api::{ApiError, CatalogApi},
    definitions::ProductDefinition,
    records::ProductRecord,
    snapshot::RemoteSnapshot,
    virtuals::synthesize_virtual_product,
};

/// Credentials and target of one sync, passed explicitly for its duration.
#[derive(Clone, Copy)]
pub struct SyncContext<'a> {
    /// Remote API handle
    pub api: &'a dyn CatalogApi,

    /// Organization whose catalog is synced
    pub organization_id: &'a str,
}

impl<'a> SyncContext<'a> {
    /// Creates a context for syncing `organization_id` through `api`.
    pub fn new(api: &'a dyn CatalogApi, organization_id: &'a str) -> Self {
        Self {
            api,
            organization_id,
        }
    }
}

impl std::fmt::Debug for SyncContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncContext")
            .field("organization_id", &self.organization_id)
            .finish_non_exhaustive()
    }
}

/// Errors that abort a sync.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A definition has no usable key.
    #[error("product {product} has no key in its metadata")]
    MissingKey {
        /// Product name
        product: String,
    },

    /// A remote call failed.
    #[error(transparent)]
    Remote(#[from] ApiError),
}

/// Reconciles `definitions` against `snapshot`, returning one record per
/// definition in the same order.
///
/// Mutations are issued one at a time. Nothing is rolled back when a later
/// definition fails.
///
/// # Errors
///
/// Returns [`SyncError::MissingKey`] for a definition without a key and
/// [`SyncError::Remote`] when a create or update call fails. Definitions
/// after the failing one are not processed.
#[tracing::instrument(
    name = "reconcile",
    skip_all,
    fields(
        organization_id = context.organization_id,
        definition_count = definitions.len()
    ),
    err
)]
pub async fn reconcile(
    context: SyncContext<'_>,
    definitions: &[ProductDefinition],
    snapshot: &RemoteSnapshot,
) -> Result<Vec<ProductRecord>, SyncError> {
    let mut records = Vec::with_capacity(definitions.len());

    for definition in definitions {
        let record = reconcile_one(context, definition, snapshot).await?;

        records.push(record);
    }

    Ok(records)
}

async fn reconcile_one(
    context: SyncContext<'_>,
    definition: &ProductDefinition,
    snapshot: &RemoteSnapshot,
) -> Result<ProductRecord, SyncError> {
    let Some(key) = definition.key() else {
        return Err(SyncError::MissingKey {
            product: definition.name.clone(),
        });
    };

    if let Some(id) = &definition.virtual_id {
        return Ok(synthesize_virtual_product(definition, id));
    }

    if let Some(existing) = snapshot.find_by_key(key) {
        let record = context.api.update_product(&existing.id, definition).await?;

        info!(key, product_id = %record.id, "Updated product {}", record.name);

        return Ok(record);
    }

    let record = context.api.create_product(definition).await?;

    info!(key, product_id = %record.id, "Created new product {}", record.name);

    Ok(record)
}
