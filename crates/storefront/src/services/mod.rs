//! External service integrations.

pub mod highlights;

pub use highlights::{HighlightsClient, HighlightsError};
