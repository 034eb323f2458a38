//! Shelf
//!
//! Shelf defines product catalogs in code, reconciles them against a Polar
//! organization and writes the resulting products back out as a source module.

pub mod amounts;
pub mod api;
pub mod codegen;
pub mod config;
pub mod definitions;
pub mod metadata;
pub mod reconcile;
pub mod records;
pub mod snapshot;
pub mod store;
pub mod virtuals;

#[cfg(test)]
mod testing;

pub use reconcile::{SyncContext, SyncError};
pub use store::{Catalog, PushOutcome, Store, StoreOptions};
