//! GraphQL queries and response shapes for the Shopify Storefront API.
//!
//! Each query lives in its own module with its `QUERY` text, `Variables`,
//! and `ResponseData` types, mirroring the layout `graphql_client` codegen
//! would produce. The queries request only the fields the adapter maps:
//! first image, first variant price/compare-at, product type, tags,
//! availability.

use serde::Deserialize;

/// An edge-wrapped node in a GraphQL connection.
#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// A GraphQL connection (`{ edges: [{ node }] }`).
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

/// A money amount; Shopify serializes `Decimal` scalars as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct MoneyNode {
    pub amount: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageNode {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantNode {
    pub price: MoneyNode,
    #[serde(rename = "compareAtPrice")]
    pub compare_at_price: Option<MoneyNode>,
}

/// A product as returned by the Storefront API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub available_for_sale: bool,
    #[serde(default)]
    pub images: Connection<ImageNode>,
    #[serde(default)]
    pub variants: Connection<VariantNode>,
}

/// A collection as returned by the Storefront API.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionNode {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image: Option<ImageNode>,
}

/// First 20 products in the store.
pub mod get_products {
    use serde::{Deserialize, Serialize};

    use super::{Connection, ProductNode};

    pub const OPERATION_NAME: &str = "GetProducts";

    pub const QUERY: &str = "
        query GetProducts {
          products(first: 20) {
            edges {
              node {
                id
                title
                handle
                description
                productType
                tags
                availableForSale
                images(first: 1) {
                  edges {
                    node {
                      url
                    }
                  }
                }
                variants(first: 1) {
                  edges {
                    node {
                      price {
                        amount
                      }
                      compareAtPrice {
                        amount
                      }
                    }
                  }
                }
              }
            }
          }
        }";

    #[derive(Debug, Serialize)]
    pub struct Variables;

    #[derive(Debug, Deserialize)]
    pub struct ResponseData {
        pub products: Connection<ProductNode>,
    }
}

/// First 20 collections in the store.
pub mod get_collections {
    use serde::{Deserialize, Serialize};

    use super::{CollectionNode, Connection};

    pub const OPERATION_NAME: &str = "GetCollections";

    pub const QUERY: &str = "
        query GetCollections {
          collections(first: 20) {
            edges {
              node {
                id
                handle
                title
                description
                image {
                  url
                }
              }
            }
          }
        }";

    #[derive(Debug, Serialize)]
    pub struct Variables;

    #[derive(Debug, Deserialize)]
    pub struct ResponseData {
        pub collections: Connection<CollectionNode>,
    }
}

/// First 20 products in a collection, by collection handle.
pub mod get_collection_products {
    use serde::{Deserialize, Serialize};

    use super::{Connection, ProductNode};

    pub const OPERATION_NAME: &str = "GetCollectionProducts";

    pub const QUERY: &str = "
        query GetCollectionProducts($handle: String!) {
          collection(handle: $handle) {
            products(first: 20) {
              edges {
                node {
                  id
                  title
                  handle
                  description
                  productType
                  tags
                  availableForSale
                  images(first: 1) {
                    edges {
                      node {
                        url
                      }
                    }
                  }
                  variants(first: 1) {
                    edges {
                      node {
                        price {
                          amount
                        }
                        compareAtPrice {
                          amount
                        }
                      }
                    }
                  }
                }
              }
            }
          }
        }";

    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub handle: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct ResponseData {
        /// `null` when the handle does not name a collection.
        pub collection: Option<CollectionProducts>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CollectionProducts {
        pub products: Connection<ProductNode>,
    }
}
