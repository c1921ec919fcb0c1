//! Session-related types.

/// Session keys for storefront data.
pub mod keys {
    /// Key for the shopping cart state.
    pub const CART: &str = "cart";
}
