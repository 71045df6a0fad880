//! Bearer credential type.

use std::fmt;

/// Opaque bearer credential attached to authenticated requests.
///
/// The raw value never appears in `Debug` output so it can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Returns the first characters of the token for display.
    #[must_use]
    pub fn preview(&self) -> String {
        let head: String = self.0.chars().take(4).collect();
        format!("{head}...")
    }

    /// Returns true if the token value is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BearerToken").field(&self.preview()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_value() {
        let token = BearerToken::new("abc123");
        assert_eq!(token.header_value(), "Bearer abc123");
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = BearerToken::new("secret-value");
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret-value"));
        assert!(debug.contains("secr..."));
    }

    #[test]
    fn test_blank() {
        assert!(BearerToken::new("  ").is_blank());
        assert!(!BearerToken::new("x").is_blank());
    }
}
