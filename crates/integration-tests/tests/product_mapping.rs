//! Integration tests for the Storefront API response mapping.
//!
//! Feeds raw GraphQL JSON (as Shopify serializes it, camelCase and all)
//! through the response shapes and conversion layer.

use rust_decimal::Decimal;

use linden_storefront::shopify::convert_product;
use linden_storefront::shopify::queries::ProductNode;

fn full_node_json() -> serde_json::Value {
    serde_json::json!({
        "id": "gid://shopify/Product/8150973283",
        "handle": "leather-handbag",
        "title": "Premium Leather Handbag",
        "description": "<p>Exquisite <b>crafted</b> leather</p>",
        "productType": "Bags",
        "tags": ["leather", "premium"],
        "availableForSale": true,
        "images": {
            "edges": [
                { "node": { "url": "https://cdn.shopify.com/handbag.jpg" } }
            ]
        },
        "variants": {
            "edges": [
                {
                    "node": {
                        "price": { "amount": "129.99" },
                        "compareAtPrice": { "amount": "159.99" }
                    }
                }
            ]
        }
    })
}

#[test]
fn full_node_maps_every_field() {
    let node: ProductNode = serde_json::from_value(full_node_json()).expect("deserialize");
    let product = convert_product(node);

    assert_eq!(product.id.as_str(), "8150973283");
    assert_eq!(product.handle, "leather-handbag");
    assert_eq!(product.name, "Premium Leather Handbag");
    assert_eq!(product.description, "Exquisite crafted leather");
    assert_eq!(product.image, "https://cdn.shopify.com/handbag.jpg");
    assert_eq!(product.category, "Bags");
    assert_eq!(product.tags, vec!["leather", "premium"]);
    assert_eq!(product.price, Decimal::new(12999, 2));
    assert_eq!(product.compare_at_price, Some(Decimal::new(15999, 2)));
    assert!(product.in_stock);
    assert!(product.on_sale());
}

#[test]
fn sparse_node_gets_defaults() {
    let json = serde_json::json!({
        "id": "gid://shopify/Product/42",
        "handle": "mystery-item",
        "title": "Mystery Item",
        "availableForSale": false
    });

    let node: ProductNode = serde_json::from_value(json).expect("deserialize");
    let product = convert_product(node);

    assert_eq!(product.description, "");
    assert_eq!(product.image, "/placeholder.jpg");
    assert_eq!(product.category, "General");
    assert!(product.tags.is_empty());
    assert_eq!(product.price, Decimal::ZERO);
    assert_eq!(product.compare_at_price, None);
    assert!(!product.in_stock);
    assert!(!product.on_sale());
}

#[test]
fn null_compare_at_price_is_not_a_sale() {
    let mut json = full_node_json();
    json["variants"]["edges"][0]["node"]["compareAtPrice"] = serde_json::Value::Null;

    let node: ProductNode = serde_json::from_value(json).expect("deserialize");
    let product = convert_product(node);

    assert_eq!(product.compare_at_price, None);
    assert!(!product.on_sale());
}

#[test]
fn unparseable_amount_maps_to_zero() {
    let mut json = full_node_json();
    json["variants"]["edges"][0]["node"]["price"]["amount"] = serde_json::json!("not-a-number");

    let node: ProductNode = serde_json::from_value(json).expect("deserialize");
    let product = convert_product(node);

    assert_eq!(product.price, Decimal::ZERO);
}
