//! Collection route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use linden_core::Collection;

use crate::catalog;
use crate::filters;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Collection display data for templates.
#[derive(Clone)]
pub struct CollectionView {
    pub handle: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl From<&Collection> for CollectionView {
    fn from(collection: &Collection) -> Self {
        Self {
            handle: collection.handle.clone(),
            title: collection.title.clone(),
            description: collection.description.clone(),
            image: collection.image.clone(),
        }
    }
}

/// Collection listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/index.html")]
pub struct CollectionsIndexTemplate {
    pub collections: Vec<CollectionView>,
}

/// Collection detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/show.html")]
pub struct CollectionShowTemplate {
    pub handle: String,
    pub products: Vec<ProductView>,
}

/// Display collection listing page.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let collections = catalog::collections(state.storefront()).await;

    CollectionsIndexTemplate {
        collections: collections.iter().map(CollectionView::from).collect(),
    }
}

/// Display collection detail page.
///
/// Unknown handles render an empty product grid rather than an error page.
pub async fn show(State(state): State<AppState>, Path(handle): Path<String>) -> impl IntoResponse {
    let products = catalog::products_by_collection(state.storefront(), &handle).await;

    CollectionShowTemplate {
        handle,
        products: products.iter().map(ProductView::from).collect(),
    }
}
