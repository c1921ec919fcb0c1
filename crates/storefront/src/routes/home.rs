//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog;
use crate::filters;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Number of products featured on the home page.
const FEATURED_COUNT: usize = 4;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// First few in-stock products, in upstream order.
    pub featured_products: Vec<ProductView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let featured_products = catalog::all_products(state.storefront())
        .await
        .iter()
        .filter(|product| product.in_stock)
        .take(FEATURED_COUNT)
        .map(ProductView::from)
        .collect();

    HomeTemplate { featured_products }
}
