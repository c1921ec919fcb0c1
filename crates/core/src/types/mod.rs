//! Core types for Linden.
//!
//! This module provides the internal catalog and cart domain types.

pub mod cart;
pub mod id;
pub mod product;

pub use cart::{CartLineItem, CartState};
pub use id::ProductId;
pub use product::{Collection, DEFAULT_CATEGORY, PLACEHOLDER_IMAGE, Product};
