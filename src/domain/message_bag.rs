//! The keyed, deduplicated message collection.

use super::{Lookup, MessageFormat, Messages, format::render_template};
use crate::{
    error::{MessageBagError, MessageBagResult},
    matching::{WildcardPattern, is_wildcard},
    ports::MessageProvider,
};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Ordered mapping from key to its raw messages.
pub type MessageMap = IndexMap<String, Vec<String>>;

/// A collection of messages grouped by key.
///
/// Keys keep the order in which they were first added and each key keeps its
/// messages in insertion order. [`add`](Self::add) never stores the same
/// message twice under one key; [`merge`](Self::merge) appends without that
/// check.
///
/// Messages are stored raw. Rendering through a [`MessageFormat`] happens on
/// read, using either the bag's default format or one supplied per call.
///
/// # Examples
///
/// ```
/// use message_bag::MessageBag;
///
/// let mut bag = MessageBag::new([("email", vec!["required", "required", "invalid"])]);
/// bag.add("name", "too short").add("name", "too short");
///
/// assert_eq!(bag.count(), 3);
/// assert_eq!(bag.get("email", None).into_flat(), vec!["required", "invalid"]);
/// assert_eq!(bag.first(Some("name"), None), "too short");
/// assert_eq!(bag.first(Some("missing"), None), "");
///
/// bag.set_format("<b>:key</b> :message");
/// assert_eq!(bag.first(None, None), "<b>email</b> required");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "IndexMap<String, Messages>")]
pub struct MessageBag {
    messages: MessageMap,
    format: MessageFormat,
}

impl MessageBag {
    /// Creates a bag seeded from key/message pairs.
    ///
    /// Each value is normalised to a sequence with duplicates removed,
    /// keeping first occurrences. A key supplied twice keeps its original
    /// position and takes the later value.
    #[must_use]
    pub fn new<I, K, M>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<Messages>,
    {
        let messages: MessageMap = entries
            .into_iter()
            .map(|(key, value)| (key.into(), Into::<Messages>::into(value).into_unique()))
            .collect();

        Self {
            messages,
            format: MessageFormat::default(),
        }
    }

    /// Creates a bag from an untyped JSON object of key to message(s).
    ///
    /// # Errors
    ///
    /// Returns [`MessageBagError::InvalidMessages`] if `value` is not an
    /// object, or [`MessageBagError::InvalidMessage`] if any value is not a
    /// string or an array of strings. Nothing is built on failure.
    pub fn try_from_json(json: Value) -> MessageBagResult<Self> {
        json_entries(json).map(Self::new)
    }

    /// Sets the default format, consuming and returning the bag.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<MessageFormat>) -> Self {
        self.format = format.into();
        self
    }

    /// Adds a message under `key` unless that key already holds it.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.push_unique(key.into(), message.into());
        self
    }

    /// Adds a message only when `condition` holds.
    pub fn add_if(
        &mut self,
        condition: bool,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        if condition {
            self.add(key, message)
        } else {
            self
        }
    }

    /// Appends raw messages key by key.
    ///
    /// Messages for a key already present are concatenated after the
    /// existing ones without a uniqueness check, so duplicates can appear.
    /// New keys are appended in the order given.
    pub fn merge(&mut self, messages: MessageMap) -> &mut Self {
        tracing::trace!(keys = messages.len(), "merging messages");

        for (key, incoming) in messages {
            self.messages.entry(key).or_default().extend(incoming);
        }

        self
    }

    /// Merges the raw messages held by another provider.
    pub fn merge_from<P: MessageProvider + ?Sized>(&mut self, provider: &P) -> &mut Self {
        let messages = provider.message_bag().messages.clone();
        self.merge(messages)
    }

    /// Merges an untyped JSON object of key to message(s).
    ///
    /// Values are taken as given; duplicates within a value are kept, as
    /// with [`merge`](Self::merge).
    ///
    /// # Errors
    ///
    /// Fails with the same errors as [`try_from_json`](Self::try_from_json).
    /// The bag is left untouched on failure.
    pub fn merge_json(&mut self, json: Value) -> MessageBagResult<&mut Self> {
        let messages: MessageMap = json_entries(json)?
            .into_iter()
            .map(|(key, value)| (key, value.into_vec()))
            .collect();

        Ok(self.merge(messages))
    }

    /// Removes `key` and all of its messages.
    pub fn forget(&mut self, key: &str) -> &mut Self {
        if let Some(removed) = self.messages.shift_remove(key) {
            tracing::trace!(key, count = removed.len(), "key forgotten");
        }

        self
    }

    /// Returns `true` if `key` has at least one message.
    ///
    /// `key` may be a wildcard, in which case any matching key counts.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        if self.is_empty() {
            return false;
        }

        !self.first(Some(key), None).is_empty()
    }

    /// Returns `true` if every key in `keys` has at least one message.
    ///
    /// With no keys this is the same as [`any`](Self::any).
    #[must_use]
    pub fn has_all<I, K>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        if self.is_empty() {
            return false;
        }

        let mut pending = keys.into_iter().peekable();
        if pending.peek().is_none() {
            return self.any();
        }

        pending.all(|key| self.has(key.as_ref()))
    }

    /// Returns `true` if at least one key in `keys` has a message.
    #[must_use]
    pub fn has_any<I, K>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        if self.is_empty() {
            return false;
        }

        keys.into_iter().any(|key| self.has(key.as_ref()))
    }

    /// Returns `true` if `key` has no messages.
    #[must_use]
    pub fn missing(&self, key: &str) -> bool {
        !self.has(key)
    }

    /// Returns `true` if none of `keys` has a message.
    #[must_use]
    pub fn missing_all<I, K>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        !self.has_any(keys)
    }

    /// Returns the first rendered message for `key`, or for the whole bag
    /// when `key` is `None`.
    ///
    /// Returns an empty string when nothing is found. For a wildcard key the
    /// first message of the first matching key is returned.
    #[must_use]
    pub fn first(&self, key: Option<&str>, format: Option<&str>) -> String {
        key.map_or_else(
            || self.all(format).into_iter().next().unwrap_or_default(),
            |wanted| {
                self.get(wanted, format)
                    .first()
                    .map(ToOwned::to_owned)
                    .unwrap_or_default()
            },
        )
    }

    /// Returns the first message for `key` using the default format.
    #[must_use]
    pub fn first_for(&self, key: &str) -> String {
        self.first(Some(key), None)
    }

    /// Returns the first message in the bag using the default format.
    #[must_use]
    pub fn first_any(&self) -> String {
        self.first(None, None)
    }

    /// Returns the rendered messages for `key`.
    ///
    /// An exact stored key wins. Otherwise a key containing `*` is matched
    /// against every stored key and the result is grouped by matched key;
    /// each group is rendered with its own key for `:key`. Anything else
    /// yields an empty literal result.
    #[must_use]
    pub fn get(&self, key: &str, format: Option<&str>) -> Lookup {
        let template = self.check_format(format);

        if let Some(messages) = self.messages.get(key) {
            return Lookup::Literal(transform(messages, template, key));
        }

        if is_wildcard(key) {
            return Lookup::Wildcard(self.messages_for_wildcard_key(key, template));
        }

        Lookup::default()
    }

    /// Returns every rendered message, key by key, in storage order.
    #[must_use]
    pub fn all(&self, format: Option<&str>) -> Vec<String> {
        let template = self.check_format(format);

        self.messages
            .iter()
            .flat_map(|(key, messages)| transform(messages, template, key))
            .collect()
    }

    /// Returns [`all`](Self::all) with repeated rendered strings removed,
    /// keeping first occurrences.
    #[must_use]
    pub fn unique(&self, format: Option<&str>) -> Vec<String> {
        self.all(format)
            .into_iter()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns the stored keys in storage order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Iterates over keys and their raw messages in storage order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<String>> {
        self.messages.iter()
    }

    /// Returns the raw messages, unformatted.
    #[must_use]
    pub const fn messages(&self) -> &MessageMap {
        &self.messages
    }

    /// Returns a copy of the raw messages, unformatted.
    #[must_use]
    pub fn to_array(&self) -> MessageMap {
        self.messages.clone()
    }

    /// Consumes the bag, returning the raw messages.
    #[must_use]
    pub fn into_messages(self) -> MessageMap {
        self.messages
    }

    /// Returns the default format.
    #[must_use]
    pub const fn format(&self) -> &MessageFormat {
        &self.format
    }

    /// Replaces the default format.
    pub fn set_format(&mut self, format: impl Into<MessageFormat>) -> &mut Self {
        self.format = format.into();
        self
    }

    /// Returns `true` if the bag holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.any()
    }

    /// Returns `true` if the bag holds at least one message.
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        self.any()
    }

    /// Returns `true` if the bag holds at least one message.
    #[must_use]
    pub fn any(&self) -> bool {
        self.count() > 0
    }

    /// Returns the number of messages across all keys.
    ///
    /// This counts messages, not keys; a key with no messages adds nothing.
    #[must_use]
    pub fn count(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    /// Renders the raw messages as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBagError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> MessageBagResult<String> {
        Ok(serde_json::to_string(&self.messages)?)
    }

    /// Renders the raw messages as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBagError::Serialization`] if encoding fails.
    pub fn to_json_pretty(&self) -> MessageBagResult<String> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }

    fn push_unique(&mut self, key: String, message: String) {
        if self.is_unique(&key, &message) {
            tracing::trace!(key = %key, "message added");
            self.messages.entry(key).or_default().push(message);
        } else {
            tracing::debug!(key = %key, "duplicate message ignored");
        }
    }

    fn is_unique(&self, key: &str, message: &str) -> bool {
        self.messages
            .get(key)
            .is_none_or(|messages| !messages.iter().any(|existing| existing == message))
    }

    fn check_format<'a>(&'a self, format: Option<&'a str>) -> &'a str {
        format
            .filter(|candidate| !candidate.is_empty())
            .unwrap_or_else(|| self.format.as_str())
    }

    fn messages_for_wildcard_key(&self, key: &str, template: &str) -> MessageMap {
        let pattern = match WildcardPattern::compile(key) {
            Ok(pattern) => pattern,
            Err(error) => {
                tracing::warn!(%error, "wildcard key could not be compiled");
                return MessageMap::new();
            }
        };

        let matched: MessageMap = self
            .messages
            .iter()
            .filter(|(stored, _)| pattern.matches(stored))
            .map(|(stored, messages)| (stored.clone(), transform(messages, template, stored)))
            .collect();

        tracing::debug!(
            pattern = pattern.as_str(),
            matched = matched.len(),
            "wildcard key resolved"
        );

        matched
    }
}

fn transform(messages: &[String], template: &str, key: &str) -> Vec<String> {
    messages
        .iter()
        .map(|message| render_template(template, message, key))
        .collect()
}

fn json_entries(json: Value) -> MessageBagResult<Vec<(String, Messages)>> {
    match json {
        Value::Object(entries) => entries
            .into_iter()
            .map(|(key, value)| Messages::from_json(&key, value).map(|messages| (key, messages)))
            .collect(),
        other => Err(MessageBagError::invalid_messages(&other)),
    }
}

impl From<IndexMap<String, Messages>> for MessageBag {
    fn from(messages: IndexMap<String, Messages>) -> Self {
        Self::new(messages)
    }
}

impl From<MessageMap> for MessageBag {
    fn from(messages: MessageMap) -> Self {
        Self::new(messages)
    }
}

impl<K, M> FromIterator<(K, M)> for MessageBag
where
    K: Into<String>,
    M: Into<Messages>,
{
    fn from_iter<I: IntoIterator<Item = (K, M)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<K, S> Extend<(K, S)> for MessageBag
where
    K: Into<String>,
    S: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, S)>>(&mut self, iter: I) {
        for (key, message) in iter {
            self.add(key, message);
        }
    }
}

impl<'a> IntoIterator for &'a MessageBag {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Value> for MessageBag {
    type Error = MessageBagError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from_json(value)
    }
}

impl Serialize for MessageBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.messages.serialize(serializer)
    }
}

impl fmt::Display for MessageBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
