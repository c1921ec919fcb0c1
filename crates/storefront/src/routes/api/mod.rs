//! JSON API route handlers.

pub mod highlights;
