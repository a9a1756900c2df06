//! Error types for message bag construction and rendering.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Query
//! operations never fail; errors only surface at the boundaries where untyped
//! input enters the bag or where the bag is serialised.

use thiserror::Error;

/// Result type for fallible message bag operations.
pub type MessageBagResult<T> = Result<T, MessageBagError>;

/// Errors that can occur while building, merging, or rendering a message bag.
#[derive(Debug, Error)]
pub enum MessageBagError {
    /// The top-level input was not a mapping of keys to messages.
    #[error("messages must be an object of key to message(s), found {found}")]
    InvalidMessages {
        /// JSON type name of the rejected input.
        found: &'static str,
    },

    /// A value under a key was neither a string nor a sequence of strings.
    #[error("messages for key '{key}' must be a string or an array of strings, found {found}")]
    InvalidMessage {
        /// The key whose value was rejected.
        key: String,
        /// JSON type name of the rejected value.
        found: &'static str,
    },

    /// A wildcard key could not be compiled into a matcher.
    #[error("invalid wildcard key '{pattern}'")]
    InvalidPattern {
        /// The wildcard key as supplied by the caller.
        pattern: String,
        /// Underlying regex compilation failure.
        #[source]
        source: regex::Error,
    },

    /// The bag could not be rendered as JSON.
    #[error("failed to serialise messages: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MessageBagError {
    /// Creates an error for a value under `key` that is not message-shaped.
    #[must_use]
    pub fn invalid_message(key: impl Into<String>, value: &serde_json::Value) -> Self {
        Self::InvalidMessage {
            key: key.into(),
            found: json_type_name(value),
        }
    }

    /// Creates an error for top-level input that is not an object.
    #[must_use]
    pub const fn invalid_messages(value: &serde_json::Value) -> Self {
        Self::InvalidMessages {
            found: json_type_name(value),
        }
    }

    /// Returns `true` if this error was caused by malformed input rather
    /// than a rendering failure.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMessages { .. } | Self::InvalidMessage { .. }
        )
    }
}

const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
