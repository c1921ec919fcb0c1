//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{HighlightsClient, HighlightsError};
use crate::shopify::StorefrontClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// API clients and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    storefront: StorefrontClient,
    highlights: HighlightsClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if a service client fails to build.
    pub fn new(config: StorefrontConfig) -> Result<Self, HighlightsError> {
        let storefront = StorefrontClient::new(&config.shopify);
        let highlights = HighlightsClient::new(&config.highlights)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                storefront,
                highlights,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the Shopify Storefront API client.
    #[must_use]
    pub fn storefront(&self) -> &StorefrontClient {
        &self.inner.storefront
    }

    /// Get a reference to the highlight generation client.
    #[must_use]
    pub fn highlights(&self) -> &HighlightsClient {
        &self.inner.highlights
    }
}
