//! Catalog read access over the Shopify adapter.
//!
//! Every fetch here recovers upstream failures to an empty result set:
//! "no products" is a valid, non-exceptional state the pages must render,
//! so transport and data-shape errors are logged and swallowed rather than
//! propagated. Callers that need to distinguish "missing" from "failed"
//! (there are none today) should use [`StorefrontClient`] directly.

use linden_core::{Collection, Product, ProductId};

use crate::shopify::StorefrontClient;

/// Sort orders for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Upstream order, unchanged.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Name,
}

impl SortKey {
    /// Parse a listing-page query value; unknown values fall back to featured.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("price-low") => Self::PriceLowToHigh,
            Some("price-high") => Self::PriceHighToLow,
            Some("name") => Self::Name,
            _ => Self::Featured,
        }
    }

    /// The query value this key round-trips through.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Name => "name",
        }
    }
}

/// All products, empty on failure.
pub async fn all_products(client: &StorefrontClient) -> Vec<Product> {
    match client.get_products().await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch products");
            Vec::new()
        }
    }
}

/// Look up a single product by its normalized id.
///
/// Linear scan over the product page; the catalog is small (one page).
pub async fn product_by_id(client: &StorefrontClient, id: &ProductId) -> Option<Product> {
    all_products(client)
        .await
        .into_iter()
        .find(|product| &product.id == id)
}

/// Products whose category matches `category`, case-insensitively.
pub async fn products_by_category(client: &StorefrontClient, category: &str) -> Vec<Product> {
    let products = all_products(client).await;
    filter_by_category(products, category)
}

/// All collections, empty on failure.
pub async fn collections(client: &StorefrontClient) -> Vec<Collection> {
    match client.get_collections().await {
        Ok(collections) => collections,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch collections");
            Vec::new()
        }
    }
}

/// Products in a collection, empty on failure or unknown handle.
pub async fn products_by_collection(client: &StorefrontClient, handle: &str) -> Vec<Product> {
    match client.get_collection_products(handle).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!(error = %e, handle, "Failed to fetch collection products");
            Vec::new()
        }
    }
}

/// Case-insensitive category filter.
#[must_use]
pub fn filter_by_category(products: Vec<Product>, category: &str) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| product.category.eq_ignore_ascii_case(category))
        .collect()
}

/// The distinct categories across `products`, in first-seen order.
#[must_use]
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&product.category))
        {
            categories.push(product.category.clone());
        }
    }
    categories
}

/// Sort products in place according to `key`.
///
/// `Featured` keeps the upstream order. Sorts are stable so ties keep their
/// relative order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Featured => {}
        SortKey::PriceLowToHigh => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHighToLow => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use linden_core::PLACEHOLDER_IMAGE;

    use super::*;

    fn product(id: &str, name: &str, category: &str, price: i64) -> Product {
        Product {
            id: ProductId::from(id),
            handle: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            description: String::new(),
            image: PLACEHOLDER_IMAGE.to_string(),
            category: category.to_string(),
            tags: vec![],
            price: Decimal::from(price),
            compare_at_price: None,
            in_stock: true,
        }
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let products = vec![
            product("1", "Handbag", "Bags", 129),
            product("2", "Vase", "Home-Decor", 189),
            product("3", "Tote", "bags", 99),
        ];

        let lower = filter_by_category(products.clone(), "bags");
        let upper = filter_by_category(products, "Bags");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 2);
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let products = vec![
            product("1", "Handbag", "Bags", 129),
            product("2", "Vase", "Home-Decor", 189),
            product("3", "Tote", "bags", 99),
            product("4", "Bowl", "Home-Decor", 49),
        ];

        assert_eq!(
            distinct_categories(&products),
            vec!["Bags".to_string(), "Home-Decor".to_string()]
        );
    }

    #[test]
    fn test_sort_by_price_low_to_high() {
        let mut products = vec![
            product("1", "A", "Bags", 300),
            product("2", "B", "Bags", 100),
            product("3", "C", "Bags", 200),
        ];
        sort_products(&mut products, SortKey::PriceLowToHigh);
        let prices: Vec<i64> = products
            .iter()
            .map(|p| p.price.try_into().unwrap_or(0))
            .collect();
        assert_eq!(prices, vec![100, 200, 300]);
    }

    #[test]
    fn test_sort_by_name() {
        let mut products = vec![
            product("1", "Vase", "Home-Decor", 1),
            product("2", "Bowl", "Home-Decor", 2),
        ];
        sort_products(&mut products, SortKey::Name);
        assert_eq!(products[0].name, "Bowl");
    }

    #[test]
    fn test_featured_keeps_order() {
        let mut products = vec![
            product("1", "Vase", "Home-Decor", 300),
            product("2", "Bowl", "Home-Decor", 100),
        ];
        sort_products(&mut products, SortKey::Featured);
        assert_eq!(products[0].name, "Vase");
    }

    #[test]
    fn test_sort_key_from_query() {
        assert_eq!(SortKey::from_query(Some("price-low")), SortKey::PriceLowToHigh);
        assert_eq!(SortKey::from_query(Some("price-high")), SortKey::PriceHighToLow);
        assert_eq!(SortKey::from_query(Some("name")), SortKey::Name);
        assert_eq!(SortKey::from_query(Some("bogus")), SortKey::Featured);
        assert_eq!(SortKey::from_query(None), SortKey::Featured);
    }
}
