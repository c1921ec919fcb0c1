//! Shopify Storefront API client.
//!
//! # Architecture
//!
//! - Query bodies are built with `graphql_client`'s runtime types and sent
//!   with `reqwest`; response shapes are modeled directly with `serde`
//!   (edges/nodes), since the adapter only reads a handful of fields.
//! - Shopify is source of truth - NO local sync, direct API calls
//! - In-memory caching via `moka` (60 second revalidation window)
//!
//! Failures are recovered to empty result sets one layer up, in
//! [`crate::catalog`]; the client itself reports every transport and
//! data-shape problem as a [`StorefrontApiError`].

mod client;
mod conversions;
pub mod queries;

pub use client::StorefrontClient;
pub use conversions::{convert_collection, convert_product};

use thiserror::Error;

/// Errors that can occur when interacting with the Storefront API.
#[derive(Debug, Error)]
pub enum StorefrontApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

/// A GraphQL error returned by the Shopify API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

impl GraphQLError {
    pub(crate) fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
        }
    }
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .map(|e| {
            let path = if e.path.is_empty() {
                String::new()
            } else {
                let joined = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                format!(" (path: {joined})")
            };

            if e.message.is_empty() {
                format!("(no details){path}")
            } else {
                format!("{}{path}", e.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
