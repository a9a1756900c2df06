//! Construction input accepted for a single key.

use crate::error::{MessageBagError, MessageBagResult};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One or more raw messages supplied for a key when building a bag.
///
/// Anything that converts into a sequence of strings can become `Messages`:
/// a single string, a `Vec`, an array, or any iterator of string-like items
/// via [`FromIterator`].
///
/// # Examples
///
/// ```
/// use message_bag::domain::Messages;
///
/// let single = Messages::from("is required");
/// assert_eq!(single.into_unique(), vec!["is required".to_owned()]);
///
/// let many: Messages = ["too short", "too short", "invalid"].into();
/// assert_eq!(many.into_unique(), vec!["too short".to_owned(), "invalid".to_owned()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Messages {
    /// A single message.
    One(String),
    /// An ordered sequence of messages, possibly containing duplicates.
    Many(Vec<String>),
}

impl Messages {
    /// Converts an untyped JSON value stored under `key`.
    ///
    /// Accepts a string or an array of strings.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBagError::InvalidMessage`] for any other shape,
    /// including arrays holding non-string elements.
    pub fn from_json(key: &str, value: Value) -> MessageBagResult<Self> {
        match value {
            Value::String(message) => Ok(Self::One(message)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(message) => Ok(message),
                    other => Err(MessageBagError::invalid_message(key, &other)),
                })
                .collect::<MessageBagResult<Vec<_>>>()
                .map(Self::Many),
            other => Err(MessageBagError::invalid_message(key, &other)),
        }
    }

    /// Returns the messages in supplied order, duplicates included.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(message) => vec![message],
            Self::Many(messages) => messages,
        }
    }

    /// Returns the messages with duplicates removed, keeping the first
    /// occurrence of each.
    #[must_use]
    pub fn into_unique(self) -> Vec<String> {
        match self {
            Self::One(message) => vec![message],
            Self::Many(messages) => messages
                .into_iter()
                .collect::<IndexSet<_>>()
                .into_iter()
                .collect(),
        }
    }
}

impl From<String> for Messages {
    fn from(message: String) -> Self {
        Self::One(message)
    }
}

impl From<&str> for Messages {
    fn from(message: &str) -> Self {
        Self::One(message.to_owned())
    }
}

impl<S: Into<String>> From<Vec<S>> for Messages {
    fn from(messages: Vec<S>) -> Self {
        messages.into_iter().collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Messages {
    fn from(messages: [S; N]) -> Self {
        messages.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Messages {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::Many(iter.into_iter().map(Into::into).collect())
    }
}
