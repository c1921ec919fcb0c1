//! Cart route handlers.
//!
//! The cart lives in the session as a [`CartState`]. Handlers load it,
//! apply one mutation, and write it back; the session layer serializes
//! per-session access, so handlers never observe a half-applied cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use linden_core::{CartLineItem, CartState, ProductId};

use crate::catalog;
use crate::error::AppError;
use crate::filters;
use crate::models::session::keys;
use crate::state::AppState;

/// Estimated tax rate applied on the cart page.
const TAX_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: Decimal,
    pub line_total: Decimal,
}

impl From<&CartLineItem> for CartItemView {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product_id: item.product_id.as_str().to_string(),
            name: item.name.clone(),
            image: item.image.clone(),
            quantity: item.quantity,
            price: item.price,
            line_total: item.line_total(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub item_count: u32,
}

impl From<&CartState> for CartView {
    fn from(cart: &CartState) -> Self {
        let subtotal = cart.total_price();
        let tax = (subtotal * TAX_RATE).round_dp(2);

        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal,
            tax,
            total: subtotal + tax,
            item_count: cart.total_quantity(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session.
///
/// A missing or undeserializable cart reads as empty.
async fn load_cart(session: &Session) -> CartState {
    session
        .get::<CartState>(keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Write the cart back to the session.
async fn save_cart(session: &Session, cart: &CartState) {
    if let Err(e) = session.insert(keys::CART, cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Update cart form data.
///
/// Quantity is signed so a zero-or-less submission removes the line.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartShowTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add item to cart.
///
/// The line snapshots the product's current name, price, and image; later
/// catalog changes do not retroactively reprice carts.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let product_id = ProductId::from(form.product_id.as_str());

    let Some(product) = catalog::product_by_id(state.storefront(), &product_id).await else {
        return Err(AppError::NotFound(format!(
            "Product not found: {}",
            form.product_id
        )));
    };

    let quantity = form.quantity.unwrap_or(1);
    let mut cart = load_cart(&session).await;
    cart.add(
        CartLineItem {
            product_id,
            name: product.name,
            price: product.price,
            image: product.image,
            quantity,
        },
        quantity,
    );
    save_cart(&session, &cart).await;

    Ok(Redirect::to("/cart").into_response())
}

/// Update cart item quantity.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> impl IntoResponse {
    let product_id = ProductId::from(form.product_id.as_str());

    let mut cart = load_cart(&session).await;
    cart.update_quantity(&product_id, form.quantity);
    save_cart(&session, &cart).await;

    Redirect::to("/cart")
}

/// Remove item from cart.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> impl IntoResponse {
    let product_id = ProductId::from(form.product_id.as_str());

    let mut cart = load_cart(&session).await;
    cart.remove(&product_id);
    save_cart(&session, &cart).await;

    Redirect::to("/cart")
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> impl IntoResponse {
    let mut cart = load_cart(&session).await;
    cart.clear();
    save_cart(&session, &cart).await;

    Redirect::to("/cart")
}

/// Get cart count badge (fragment).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartCountTemplate {
        count: cart.total_quantity(),
    }
}
