//! Linden Core - Shared types library.
//!
//! This crate provides common types used across all Linden components:
//! - `storefront` - Public-facing e-commerce site
//! - `integration-tests` - Workspace-level tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. The cart
//! state machine lives here so it can be exercised without a running server.
//!
//! # Modules
//!
//! - [`types`] - Product, collection, and cart types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
