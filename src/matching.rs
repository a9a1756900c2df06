//! Wildcard key patterns.
//!
//! A `*` in a key matches any run of characters, including none and
//! including separators such as `.`. Every other character matches itself.

use crate::error::{MessageBagError, MessageBagResult};
use regex::Regex;

/// Marker that turns a key into a wildcard pattern.
pub const WILDCARD: char = '*';

/// Returns `true` if `key` should be treated as a pattern.
#[must_use]
pub fn is_wildcard(key: &str) -> bool {
    key.contains(WILDCARD)
}

/// A compiled wildcard key.
///
/// # Examples
///
/// ```
/// use message_bag::matching::WildcardPattern;
///
/// let pattern = WildcardPattern::compile("items.*.name").expect("valid pattern");
/// assert!(pattern.matches("items.0.name"));
/// assert!(pattern.matches("items.0.tags.1.name"));
/// assert!(!pattern.matches("items.0.price"));
/// ```
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    pattern: String,
    regex: Regex,
}

impl WildcardPattern {
    /// Compiles `pattern` into a matcher.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBagError::InvalidPattern`] if the generated
    /// expression exceeds the regex engine's size limits.
    pub fn compile(pattern: &str) -> MessageBagResult<Self> {
        let body = pattern
            .split(WILDCARD)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        Regex::new(&format!(r"(?s)\A{body}\z"))
            .map(|regex| Self {
                pattern: pattern.to_owned(),
                regex,
            })
            .map_err(|source| MessageBagError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    /// Returns `true` if `key` matches this pattern.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        key == self.pattern || self.regex.is_match(key)
    }

    /// Returns the pattern as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}
