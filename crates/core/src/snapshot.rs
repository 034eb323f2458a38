//! Remote Snapshot

use tracing::debug;

use crate::{
    api::{ApiError, collect_pages},
    reconcile::SyncContext,
    records::{Benefit, ProductRecord},
};

/// Every product and benefit of one organization at a point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteSnapshot {
    /// All remote products, archived ones included
    pub products: Vec<ProductRecord>,

    /// All remote benefits
    pub benefits: Vec<Benefit>,
}

impl RemoteSnapshot {
    /// First remote product whose metadata key equals `key`.
    pub fn find_by_key(&self, key: &str) -> Option<&ProductRecord> {
        let mut matches = self
            .products
            .iter()
            .filter(|product| product.key() == Some(key));

        let found = matches.next();

        if matches.next().is_some() {
            debug!(key, "multiple remote products share a key, using the first");
        }

        found
    }
}

/// Fetches the organization's full product and benefit listings.
///
/// Both listings are drained concurrently.
///
/// # Errors
///
/// Returns the first API error from either listing.
pub async fn fetch_snapshot(context: SyncContext<'_>) -> Result<RemoteSnapshot, ApiError> {
    let SyncContext {
        api,
        organization_id,
    } = context;

    let (products, benefits) = tokio::try_join!(
        collect_pages(move |page| api.list_products(organization_id, page)),
        collect_pages(move |page| api.list_benefits(organization_id, page)),
    )?;

    debug!(
        products = products.len(),
        benefits = benefits.len(),
        "fetched remote snapshot"
    );

    Ok(RemoteSnapshot { products, benefits })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        api::{MockCatalogApi, Page, Pagination},
        testing::remote_product,
    };

    use super::*;

    fn page<T>(items: Vec<T>, max_page: u32) -> Page<T> {
        Page {
            pagination: Pagination {
                total_count: 0,
                max_page,
            },
            items,
        }
    }

    #[tokio::test]
    async fn fetch_snapshot_drains_both_listings() -> TestResult {
        let mut api = MockCatalogApi::new();

        api.expect_list_products()
            .once()
            .withf(|organization_id, page| organization_id == "org_1" && *page == 1)
            .return_once(|_, _| Ok(page(vec![remote_product("prod_1", "a")], 2)));

        api.expect_list_products()
            .once()
            .withf(|organization_id, page| organization_id == "org_1" && *page == 2)
            .return_once(|_, _| Ok(page(vec![remote_product("prod_2", "b")], 2)));

        api.expect_list_benefits()
            .once()
            .withf(|organization_id, page| organization_id == "org_1" && *page == 1)
            .return_once(|_, _| Ok(page(Vec::new(), 0)));

        api.expect_create_product().never();
        api.expect_update_product().never();

        let snapshot = fetch_snapshot(SyncContext::new(&api, "org_1")).await?;

        let ids: Vec<&str> = snapshot
            .products
            .iter()
            .map(|product| product.id.as_str())
            .collect();

        assert_eq!(ids, vec!["prod_1", "prod_2"]);
        assert!(snapshot.benefits.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn fetch_snapshot_propagates_listing_errors() {
        let mut api = MockCatalogApi::new();

        api.expect_list_products().returning(|_, _| {
            Err(ApiError::UnexpectedResponse {
                action: "list products",
                status: 401,
                body: "invalid token".to_string(),
            })
        });
        api.expect_list_benefits()
            .returning(|_, _| Ok(page(Vec::new(), 0)));

        let result = fetch_snapshot(SyncContext::new(&api, "org_1")).await;

        assert!(
            matches!(result, Err(ApiError::UnexpectedResponse { status: 401, .. })),
            "expected 401, got {result:?}"
        );
    }

    #[test]
    fn find_by_key_takes_the_first_match() {
        let snapshot = RemoteSnapshot {
            products: vec![
                remote_product("prod_other", "other"),
                remote_product("prod_first", "pro"),
                remote_product("prod_second", "pro"),
            ],
            benefits: Vec::new(),
        };

        let found = snapshot.find_by_key("pro").map(|product| product.id.as_str());

        assert_eq!(found, Some("prod_first"));
    }

    #[test]
    fn find_by_key_is_case_sensitive() {
        let snapshot = RemoteSnapshot {
            products: vec![remote_product("prod_1", "Pro")],
            benefits: Vec::new(),
        };

        assert!(snapshot.find_by_key("pro").is_none());
    }
}
