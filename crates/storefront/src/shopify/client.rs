//! HTTP transport for the Shopify Storefront API.

use std::sync::Arc;
use std::time::Duration;

use graphql_client::{QueryBody, Response};
use moka::future::Cache;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use linden_core::{Collection, Product};

use crate::config::ShopifyStorefrontConfig;

use super::queries::{get_collection_products, get_collections, get_products};
use super::{GraphQLError, StorefrontApiError, convert_collection, convert_product};

/// Cache TTL; the fixed revalidation window for catalog data.
const REVALIDATE_WINDOW: Duration = Duration::from_secs(60);

/// Cache key for catalog queries.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Products,
    Collections,
    CollectionProducts(String),
}

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Products(Vec<Product>),
    Collections(Vec<Collection>),
}

// =============================================================================
// StorefrontClient
// =============================================================================

/// Client for the Shopify Storefront API.
///
/// Fetches products and collections and converts them to the internal flat
/// shapes. Results are cached for the revalidation window (60 seconds).
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl StorefrontClient {
    /// Create a new Storefront API client.
    #[must_use]
    pub fn new(config: &ShopifyStorefrontConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(100)
            .time_to_live(REVALIDATE_WINDOW)
            .build();

        let endpoint = format!(
            "https://{}/api/{}/graphql.json",
            config.store, config.api_version
        );

        Self {
            inner: Arc::new(StorefrontClientInner {
                client: reqwest::Client::new(),
                endpoint,
                access_token: config.access_token.expose_secret().to_string(),
                cache,
            }),
        }
    }

    /// Execute a GraphQL query.
    async fn execute<V, D>(&self, body: &QueryBody<V>) -> Result<D, StorefrontApiError>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header(
                "X-Shopify-Storefront-Access-Token",
                &self.inner.access_token,
            )
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(StorefrontApiError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify API returned non-success status"
            );
            return Err(StorefrontApiError::GraphQL(vec![GraphQLError::message(
                format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
            )]));
        }

        // Parse the response envelope
        let response: Response<D> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Shopify GraphQL response"
                );
                return Err(StorefrontApiError::Parse(e));
            }
        };

        // Check for GraphQL errors
        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            return Err(StorefrontApiError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| GraphQLError {
                        message: e.message,
                        path: e.path.map_or_else(Vec::new, |p| {
                            p.into_iter()
                                .map(|fragment| match fragment {
                                    graphql_client::PathFragment::Key(s) => {
                                        serde_json::Value::String(s)
                                    }
                                    graphql_client::PathFragment::Index(i) => {
                                        serde_json::Value::Number(i.into())
                                    }
                                })
                                .collect()
                        }),
                    })
                    .collect(),
            ));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify GraphQL response has no data and no errors"
            );
            StorefrontApiError::GraphQL(vec![GraphQLError::message("No data in response")])
        })
    }

    /// Get the first page of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response shape is
    /// unexpected.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, StorefrontApiError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let body = QueryBody {
            variables: get_products::Variables,
            query: get_products::QUERY,
            operation_name: get_products::OPERATION_NAME,
        };

        let data: get_products::ResponseData = self.execute(&body).await?;

        let products: Vec<Product> = data
            .products
            .edges
            .into_iter()
            .map(|e| convert_product(e.node))
            .collect();

        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Get the first page of collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response shape is
    /// unexpected.
    #[instrument(skip(self))]
    pub async fn get_collections(&self) -> Result<Vec<Collection>, StorefrontApiError> {
        if let Some(CacheValue::Collections(collections)) =
            self.inner.cache.get(&CacheKey::Collections).await
        {
            debug!("Cache hit for collections");
            return Ok(collections);
        }

        let body = QueryBody {
            variables: get_collections::Variables,
            query: get_collections::QUERY,
            operation_name: get_collections::OPERATION_NAME,
        };

        let data: get_collections::ResponseData = self.execute(&body).await?;

        let collections: Vec<Collection> = data
            .collections
            .edges
            .into_iter()
            .map(|e| convert_collection(e.node))
            .collect();

        self.inner
            .cache
            .insert(
                CacheKey::Collections,
                CacheValue::Collections(collections.clone()),
            )
            .await;

        Ok(collections)
    }

    /// Get the first page of products in a collection.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the handle does not name a collection, or an
    /// error if the API request fails.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn get_collection_products(
        &self,
        handle: &str,
    ) -> Result<Vec<Product>, StorefrontApiError> {
        let cache_key = CacheKey::CollectionProducts(handle.to_string());

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for collection products");
            return Ok(products);
        }

        let body = QueryBody {
            variables: get_collection_products::Variables {
                handle: handle.to_string(),
            },
            query: get_collection_products::QUERY,
            operation_name: get_collection_products::OPERATION_NAME,
        };

        let data: get_collection_products::ResponseData = self.execute(&body).await?;

        let collection = data
            .collection
            .ok_or_else(|| StorefrontApiError::NotFound(format!("Collection not found: {handle}")))?;

        let products: Vec<Product> = collection
            .products
            .edges
            .into_iter()
            .map(|e| convert_product(e.node))
            .collect();

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }
}
