//! Polar API client.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    api::{ApiError, CatalogApi, Page},
    definitions::ProductDefinition,
    records::{Benefit, ProductRecord},
};

/// Items requested per page when listing.
const PAGE_LIMIT: u32 = 100;

/// Hosted Polar environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolarServer {
    /// Live environment
    Production,

    /// Sandbox environment
    Sandbox,
}

impl PolarServer {
    /// Base URL of the environment.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => "https://api.polar.sh",
            Self::Sandbox => "https://sandbox-api.polar.sh",
        }
    }
}

/// Configuration for connecting to Polar.
#[derive(Clone)]
pub struct PolarConfig {
    /// API base URL, e.g. `"https://api.polar.sh"`.
    pub base_url: String,

    /// Organization access token.
    pub access_token: String,
}

impl PolarConfig {
    /// Configuration for a hosted environment.
    #[must_use]
    pub fn for_server(server: PolarServer, access_token: String) -> Self {
        Self {
            base_url: server.base_url().to_string(),
            access_token,
        }
    }
}

impl std::fmt::Debug for PolarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolarConfig")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// HTTP client for the Polar products and benefits endpoints.
#[derive(Debug, Clone)]
pub struct PolarClient {
    config: PolarConfig,
    http: Client,
}

impl PolarClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: PolarConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.config.access_token)
    }

    fn list_request(&self, path: &str, organization_id: &str, page: u32) -> RequestBuilder {
        self.authorized(self.http.get(self.url(path))).query(&[
            ("organization_id", organization_id.to_string()),
            ("page", page.to_string()),
            ("limit", PAGE_LIMIT.to_string()),
        ])
    }

    fn create_request(&self, product: &ProductDefinition) -> RequestBuilder {
        self.authorized(self.http.post(self.url("/v1/products/")))
            .json(product)
    }

    async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        organization_id: &str,
        page: u32,
        action: &'static str,
    ) -> Result<Page<T>, ApiError> {
        let response = self
            .list_request(path, organization_id, page)
            .send()
            .await?;

        read_json(response, action).await
    }
}

#[async_trait]
impl CatalogApi for PolarClient {
    async fn list_products(
        &self,
        organization_id: &str,
        page: u32,
    ) -> Result<Page<ProductRecord>, ApiError> {
        self.list("/v1/products/", organization_id, page, "list products")
            .await
    }

    async fn list_benefits(
        &self,
        organization_id: &str,
        page: u32,
    ) -> Result<Page<Benefit>, ApiError> {
        self.list("/v1/benefits/", organization_id, page, "list benefits")
            .await
    }

    async fn create_product(
        &self,
        product: &ProductDefinition,
    ) -> Result<ProductRecord, ApiError> {
        let response = self.create_request(product).send().await?;

        read_json(response, "create product").await
    }

    async fn update_product(
        &self,
        id: &str,
        update: &ProductDefinition,
    ) -> Result<ProductRecord, ApiError> {
        let response = self
            .authorized(self.http.patch(self.url(&format!("/v1/products/{id}"))))
            .json(update)
            .send()
            .await?;

        read_json(response, "update product").await
    }
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    action: &'static str,
) -> Result<T, ApiError> {
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        return Err(ApiError::UnexpectedResponse {
            action,
            status,
            body,
        });
    }

    Ok(response.json().await?)
}
