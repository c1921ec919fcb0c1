//! Catalog types: products and collections.
//!
//! These are the flat internal shapes the storefront renders. They are
//! produced by the Shopify adapter and treated as immutable within a
//! revalidation window; nothing in the application mutates a `Product` after
//! conversion.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Image path served when a product has no images upstream.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Category assigned when a product has no product type upstream.
pub const DEFAULT_CATEGORY: &str = "General";

/// A storefront product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Normalized identifier (see [`ProductId::from_external`]).
    pub id: ProductId,
    /// URL-safe handle from the upstream store.
    pub handle: String,
    /// Display name.
    pub name: String,
    /// Plain-text description (HTML stripped by the adapter).
    pub description: String,
    /// First product image URL, or [`PLACEHOLDER_IMAGE`].
    pub image: String,
    /// Product type, or [`DEFAULT_CATEGORY`].
    pub category: String,
    /// Upstream tags; empty when the product has none.
    pub tags: Vec<String>,
    /// First variant price.
    pub price: Decimal,
    /// First variant compare-at price, when the product is on sale.
    pub compare_at_price: Option<Decimal>,
    /// Whether the product is available for sale.
    pub in_stock: bool,
}

impl Product {
    /// Whether the product is discounted relative to its compare-at price.
    #[must_use]
    pub fn on_sale(&self) -> bool {
        self.compare_at_price
            .is_some_and(|compare_at| compare_at > self.price)
    }
}

/// A storefront collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub description: String,
    /// Collection image URL, when one is set upstream.
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: Decimal, compare_at: Option<Decimal>) -> Product {
        Product {
            id: ProductId::from("1"),
            handle: "leather-handbag".to_string(),
            name: "Leather Handbag".to_string(),
            description: "Crafted leather handbag".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            category: "Bags".to_string(),
            tags: vec![],
            price,
            compare_at_price: compare_at,
            in_stock: true,
        }
    }

    #[test]
    fn test_on_sale_requires_higher_compare_at() {
        assert!(product(Decimal::new(9999, 2), Some(Decimal::new(12999, 2))).on_sale());
        assert!(!product(Decimal::new(9999, 2), Some(Decimal::new(9999, 2))).on_sale());
        assert!(!product(Decimal::new(9999, 2), None).on_sale());
    }
}
