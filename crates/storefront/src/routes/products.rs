//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use linden_core::{Product, ProductId};

use crate::catalog::{self, SortKey};
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub tags: Vec<String>,
    pub price: Decimal,
    pub compare_at_price: Option<Decimal>,
    pub in_stock: bool,
    pub on_sale: bool,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_str().to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            tags: product.tags.clone(),
            price: product.price,
            compare_at_price: product.compare_at_price,
            in_stock: product.in_stock,
            on_sale: product.on_sale(),
        }
    }
}

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
    pub categories: Vec<String>,
    pub selected_category: Option<String>,
    pub sort: &'static str,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
}

/// Product not found page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub id: String,
}

/// Treat an empty `category` query value the same as an absent one.
///
/// The listing page's "All" option submits `category=`, which must not
/// filter the grid down to nothing.
fn selected_category(category: Option<String>) -> Option<String> {
    category.filter(|c| !c.is_empty())
}

/// Display product listing page.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    let all = catalog::all_products(state.storefront()).await;
    let categories = catalog::distinct_categories(&all);

    let selected = selected_category(query.category);
    let mut products = match &selected {
        Some(category) => catalog::filter_by_category(all, category),
        None => all,
    };

    let sort = SortKey::from_query(query.sort.as_deref());
    catalog::sort_products(&mut products, sort);

    ProductsIndexTemplate {
        products: products.iter().map(ProductView::from).collect(),
        categories,
        selected_category: selected,
        sort: sort.as_query(),
    }
}

/// Display product detail page.
///
/// Unknown ids render the not-found page with a 404 status.
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let product_id = ProductId::from(id.as_str());

    match catalog::product_by_id(state.storefront(), &product_id).await {
        Some(product) => ProductShowTemplate {
            product: ProductView::from(&product),
        }
        .into_response(),
        None => (StatusCode::NOT_FOUND, ProductNotFoundTemplate { id }).into_response(),
    }
}
