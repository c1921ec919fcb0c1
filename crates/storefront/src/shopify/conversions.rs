//! Conversions from Storefront API nodes to the internal flat shapes.
//!
//! Defaults applied here mirror what the storefront renders when upstream
//! data is sparse: placeholder image, "General" category, empty tags, zero
//! price. These functions are pure so the mapping can be tested against
//! JSON fixtures without a network.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use linden_core::{Collection, DEFAULT_CATEGORY, PLACEHOLDER_IMAGE, Product, ProductId};

use super::queries::{CollectionNode, ProductNode};

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<[^>]*>").expect("valid literal regex"));

/// Strip HTML tags from a product description.
fn strip_html(input: &str) -> String {
    HTML_TAG.replace_all(input, "").into_owned()
}

/// Parse a Shopify string amount; unparseable amounts map to zero.
fn parse_amount(amount: &str) -> Decimal {
    amount.parse().unwrap_or_default()
}

/// Convert a Storefront API product node to a [`Product`].
#[must_use]
pub fn convert_product(node: ProductNode) -> Product {
    let image = node
        .images
        .edges
        .into_iter()
        .next()
        .map_or_else(|| PLACEHOLDER_IMAGE.to_string(), |e| e.node.url);

    let first_variant = node.variants.edges.into_iter().next().map(|e| e.node);
    let price = first_variant
        .as_ref()
        .map_or_else(Decimal::default, |v| parse_amount(&v.price.amount));
    let compare_at_price = first_variant
        .and_then(|v| v.compare_at_price)
        .and_then(|m| m.amount.parse().ok());

    let category = match node.product_type {
        Some(kind) if !kind.is_empty() => kind,
        _ => DEFAULT_CATEGORY.to_string(),
    };

    Product {
        id: ProductId::from_external(&node.id),
        handle: node.handle,
        name: node.title,
        description: strip_html(&node.description.unwrap_or_default()),
        image,
        category,
        tags: node.tags.unwrap_or_default(),
        price,
        compare_at_price,
        in_stock: node.available_for_sale,
    }
}

/// Convert a Storefront API collection node to a [`Collection`].
#[must_use]
pub fn convert_collection(node: CollectionNode) -> Collection {
    Collection {
        id: node.id,
        handle: node.handle,
        title: node.title,
        description: node.description.unwrap_or_default(),
        image: node.image.map(|i| i.url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shopify::queries::{Connection, Edge, ImageNode, MoneyNode, VariantNode};

    fn node() -> ProductNode {
        ProductNode {
            id: "gid://shopify/Product/8150973283".to_string(),
            handle: "leather-handbag".to_string(),
            title: "Premium Leather Handbag".to_string(),
            description: Some("<p>Exquisite <b>crafted</b> leather</p>".to_string()),
            product_type: Some("Bags".to_string()),
            tags: Some(vec!["leather".to_string(), "premium".to_string()]),
            available_for_sale: true,
            images: Connection {
                edges: vec![Edge {
                    node: ImageNode {
                        url: "https://cdn.shopify.com/handbag.jpg".to_string(),
                    },
                }],
            },
            variants: Connection {
                edges: vec![
                    Edge {
                        node: VariantNode {
                            price: MoneyNode {
                                amount: "129.99".to_string(),
                            },
                            compare_at_price: Some(MoneyNode {
                                amount: "159.99".to_string(),
                            }),
                        },
                    },
                    Edge {
                        node: VariantNode {
                            price: MoneyNode {
                                amount: "999.99".to_string(),
                            },
                            compare_at_price: None,
                        },
                    },
                ],
            },
        }
    }

    #[test]
    fn test_price_comes_from_first_variant() {
        let product = convert_product(node());
        assert_eq!(product.price, Decimal::new(12999, 2));
        assert_eq!(product.compare_at_price, Some(Decimal::new(15999, 2)));
    }

    #[test]
    fn test_missing_images_fall_back_to_placeholder() {
        let mut n = node();
        n.images = Connection::default();
        let product = convert_product(n);
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_missing_variants_price_zero() {
        let mut n = node();
        n.variants = Connection::default();
        let product = convert_product(n);
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.compare_at_price, None);
    }

    #[test]
    fn test_empty_product_type_defaults_to_general() {
        let mut n = node();
        n.product_type = Some(String::new());
        assert_eq!(convert_product(n).category, "General");

        let mut n = node();
        n.product_type = None;
        assert_eq!(convert_product(n).category, "General");
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let mut n = node();
        n.tags = None;
        assert!(convert_product(n).tags.is_empty());
    }

    #[test]
    fn test_description_html_is_stripped() {
        let product = convert_product(node());
        assert_eq!(product.description, "Exquisite crafted leather");
    }

    #[test]
    fn test_id_is_reduced_to_numeric_suffix() {
        let product = convert_product(node());
        assert_eq!(product.id.as_str(), "8150973283");
    }

    #[test]
    fn test_collection_conversion() {
        let collection = convert_collection(CollectionNode {
            id: "gid://shopify/Collection/42".to_string(),
            handle: "bags".to_string(),
            title: "Bags".to_string(),
            description: None,
            image: None,
        });
        assert_eq!(collection.handle, "bags");
        assert_eq!(collection.description, "");
        assert_eq!(collection.image, None);
    }
}
