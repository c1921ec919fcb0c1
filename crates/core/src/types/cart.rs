//! Session cart state.
//!
//! `CartState` is the single source of truth for a visitor's cart. It is a
//! plain serde-serializable value: the storefront loads it from the session
//! at the start of a cart request and writes it back after every mutation.
//! There is one logical writer per session, so no locking happens here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// One cart line.
///
/// Carries a display snapshot (name, price, image) captured when the item was
/// added, so the cart page renders without re-fetching the catalog. Keyed by
/// product id: a cart never holds two lines for the same product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    /// Always >= 1; an update that would reach 0 removes the line instead.
    pub quantity: u32,
}

impl CartLineItem {
    /// Line subtotal (price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Ordered cart contents.
///
/// Lines keep insertion order; adding an existing product increments its
/// quantity in place rather than reordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` units of a product.
    ///
    /// If a line for the same product id exists its quantity is incremented
    /// and its position preserved; otherwise a new line is appended with the
    /// given snapshot. A zero quantity is a no-op.
    pub fn add(&mut self, item: CartLineItem, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }
        self.items.push(CartLineItem { quantity, ..item });
    }

    /// Set a line's quantity to exactly `quantity`.
    ///
    /// A quantity of zero or below removes the line entirely. Unknown ids are
    /// a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| &line.product_id == product_id)
        {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove a line if present; no-op otherwise.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|line| &line.product_id != product_id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total price across all lines, recomputed on every read.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Total unit count across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |sum, line| sum.saturating_add(line.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: i64) -> CartLineItem {
        CartLineItem {
            product_id: ProductId::from(id),
            name: format!("Product {id}"),
            price: Decimal::from(price),
            image: "/placeholder.jpg".to_string(),
            quantity: 1,
        }
    }

    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let mut cart = CartState::new();
        cart.add(line("1", 10), 2);
        cart.add(line("1", 10), 3);
        cart.add(line("1", 10), 1);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 6);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = CartState::new();
        cart.add(line("1", 10), 1);
        cart.add(line("2", 20), 1);
        cart.add(line("1", 10), 1);
        cart.add(line("3", 30), 1);

        let ids: Vec<&str> = cart
            .items()
            .iter()
            .map(|l| l.product_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut cart = CartState::new();
        cart.add(line("1", 10), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let mut cart = CartState::new();
        cart.add(line("1", 10), 5);
        cart.update_quantity(&ProductId::from("1"), 2);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = CartState::new();
        cart.add(line("1", 10), 2);
        cart.update_quantity(&ProductId::from("1"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_negative_removes_line() {
        let mut cart = CartState::new();
        cart.add(line("1", 10), 2);
        cart.update_quantity(&ProductId::from("1"), -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut cart = CartState::new();
        cart.add(line("1", 10), 2);
        cart.update_quantity(&ProductId::from("missing"), 4);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = CartState::new();
        cart.add(line("1", 10), 1);
        cart.remove(&ProductId::from("missing"));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = CartState::new();
        cart.add(line("1", 10), 1);
        cart.add(line("2", 20), 1);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_total_price_sums_price_times_quantity() {
        let mut cart = CartState::new();
        cart.add(line("1", 10), 2);
        cart.add(line("2", 5), 3);
        assert_eq!(cart.total_price(), Decimal::from(35));
    }

    #[test]
    fn test_total_quantity_sums_lines() {
        let mut cart = CartState::new();
        cart.add(line("1", 10), 2);
        cart.add(line("2", 5), 3);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_serde_round_trip_preserves_lines() {
        let mut cart = CartState::new();
        cart.add(line("1", 10), 2);
        cart.add(line("2", 5), 3);

        let json = serde_json::to_string(&cart).expect("serialize");
        let restored: CartState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, cart);
        assert_eq!(restored.total_price(), Decimal::from(35));
    }
}
