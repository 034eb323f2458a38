//! Remote Catalog API

use std::future::Future;

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    definitions::ProductDefinition,
    records::{Benefit, ProductRecord},
};

mod polar;

pub use polar::{PolarClient, PolarConfig, PolarServer};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,

    /// Paging summary
    pub pagination: Pagination,
}

/// Paging summary returned with every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Total number of items across all pages
    pub total_count: u64,

    /// Last page number
    pub max_page: u32,
}

/// Errors returned by the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{action} failed with status {status}: {body}")]
    UnexpectedResponse {
        /// What was being attempted
        action: &'static str,

        /// HTTP status code
        status: u16,

        /// Response body
        body: String,
    },
}

/// Product and benefit endpoints of the remote commerce platform.
///
/// Retries, if any, are the implementation's concern.
#[automock]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Lists one page of the organization's products.
    async fn list_products(
        &self,
        organization_id: &str,
        page: u32,
    ) -> Result<Page<ProductRecord>, ApiError>;

    /// Lists one page of the organization's benefits.
    async fn list_benefits(
        &self,
        organization_id: &str,
        page: u32,
    ) -> Result<Page<Benefit>, ApiError>;

    /// Creates a product from the full definition. The owning organization is
    /// implied by the access token.
    async fn create_product(
        &self,
        product: &ProductDefinition,
    ) -> Result<ProductRecord, ApiError>;

    /// Replaces an existing product with the given definition.
    async fn update_product(
        &self,
        id: &str,
        update: &ProductDefinition,
    ) -> Result<ProductRecord, ApiError>;
}

/// Fetches pages starting at page 1 until the last page, collecting every item.
///
/// # Errors
///
/// Returns the first error produced by `fetch`.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiError>>,
{
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let Page {
            items: page_items,
            pagination,
        } = fetch(page).await?;

        let exhausted = page_items.is_empty() || page >= pagination.max_page;

        items.extend(page_items);

        if exhausted {
            return Ok(items);
        }

        page += 1;
    }
}
