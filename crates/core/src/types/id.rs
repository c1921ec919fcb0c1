//! Product identifier with external-id normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Internal product identifier.
///
/// Shopify exposes products under opaque composite GIDs such as
/// `gid://shopify/Product/8472913` while the rest of the application wants a
/// short stable key. [`ProductId::from_external`] reduces an external id to
/// its trailing numeric suffix when one exists; ids without a numeric suffix
/// are kept verbatim.
///
/// The suffix reduction is a lossy compatibility shim for the upstream id
/// format. Do not generalize it to other id schemes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from an already-normalized value.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Normalize an external (Shopify GID) identifier.
    #[must_use]
    pub fn from_external(external: &str) -> Self {
        let suffix_len = external
            .chars()
            .rev()
            .take_while(char::is_ascii_digit)
            .count();
        if suffix_len == 0 {
            return Self(external.to_string());
        }
        let start = external.len() - suffix_len;
        Self(external.get(start..).unwrap_or(external).to_string())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
