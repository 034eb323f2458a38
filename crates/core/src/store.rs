//! Store
//!
//! The store collects product definitions and pushes them to the remote
//! catalog in one sync.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{
    api::CatalogApi,
    definitions::{DefinitionError, ProductDefinition, ProductInput},
    reconcile::{SyncContext, SyncError, reconcile},
    records::ProductRecord,
    snapshot::{RemoteSnapshot, fetch_snapshot},
};

/// Remote target of a store.
#[derive(Clone)]
pub struct StoreOptions {
    /// Remote API handle
    pub api: Arc<dyn CatalogApi>,

    /// Organization whose catalog the store manages
    pub organization_id: String,
}

impl std::fmt::Debug for StoreOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreOptions")
            .field("organization_id", &self.organization_id)
            .finish_non_exhaustive()
    }
}

/// Result of a successful push.
#[derive(Debug, Clone, PartialEq)]
pub struct PushOutcome {
    /// One record per definition, in definition order
    pub updated_products: Vec<ProductRecord>,
}

/// Anything that can register products with a store.
pub trait Catalog {
    /// Error raised while registering.
    type Error;

    /// Defines every product of the catalog on `store`.
    ///
    /// # Errors
    ///
    /// Returns an error when a product cannot be defined.
    fn register(self, store: &mut Store) -> Result<(), Self::Error>;
}

/// Product definitions awaiting a push.
#[derive(Debug)]
pub struct Store {
    options: StoreOptions,
    definitions: Vec<ProductDefinition>,
    keys: FxHashSet<String>,
}

impl Store {
    /// Creates an empty store.
    pub fn new(options: StoreOptions) -> Self {
        Self {
            options,
            definitions: Vec::new(),
            keys: FxHashSet::default(),
        }
    }

    /// Creates a store and registers `catalog` on it.
    ///
    /// # Errors
    ///
    /// Returns the catalog's registration error.
    pub fn with_catalog<C: Catalog>(options: StoreOptions, catalog: C) -> Result<Self, C::Error> {
        let mut store = Self::new(options);

        catalog.register(&mut store)?;

        Ok(store)
    }

    /// Defines a product, converting its amounts to minor units.
    ///
    /// Returns the stored definition.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::DuplicateKey`] when another product already
    /// uses the key, or any conversion error from
    /// [`ProductInput::into_definition`].
    pub fn define_product(
        &mut self,
        input: ProductInput,
    ) -> Result<ProductDefinition, DefinitionError> {
        if self.keys.contains(&input.key) {
            return Err(DefinitionError::DuplicateKey { key: input.key });
        }

        let key = input.key.clone();
        let definition = input.into_definition()?;

        self.keys.insert(key);
        self.definitions.push(definition.clone());

        Ok(definition)
    }

    /// Definitions in the order they were defined.
    pub fn definitions(&self) -> &[ProductDefinition] {
        &self.definitions
    }

    /// Syncs every definition to the remote catalog.
    ///
    /// The remote snapshot is fetched fresh on every push. It is skipped when
    /// every definition is virtual.
    ///
    /// # Errors
    ///
    /// Returns the first [`SyncError`] raised while fetching or reconciling.
    pub async fn push(&self) -> Result<PushOutcome, SyncError> {
        let context = SyncContext::new(self.options.api.as_ref(), &self.options.organization_id);

        let snapshot = if self.definitions.iter().all(ProductDefinition::is_virtual) {
            debug!("all definitions are virtual, skipping remote snapshot");

            RemoteSnapshot::default()
        } else {
            fetch_snapshot(context).await?
        };

        let updated_products = reconcile(context, &self.definitions, &snapshot).await?;

        Ok(PushOutcome { updated_products })
    }
}
