//! Request-scoped data models.

pub mod session;
