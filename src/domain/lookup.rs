//! Result shape returned by keyed lookups.

use super::MessageMap;

/// Rendered messages found for a key.
///
/// A literal key yields a flat sequence. A wildcard key yields the rendered
/// messages of every matching stored key, grouped by that key. The two
/// shapes are kept distinct so callers can tell which kind of lookup ran.
///
/// # Examples
///
/// ```
/// use message_bag::MessageBag;
///
/// let bag = MessageBag::new([
///     ("items.0.name", "first name missing"),
///     ("items.1.name", "second name missing"),
/// ]);
///
/// let literal = bag.get("items.0.name", None);
/// assert_eq!(literal.as_literal(), Some(&["first name missing".to_owned()][..]));
///
/// let wildcard = bag.get("items.*.name", None);
/// let matched = wildcard.as_wildcard().map(|map| map.len());
/// assert_eq!(matched, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Messages stored under the exact key requested.
    Literal(Vec<String>),
    /// Messages of every stored key matched by a wildcard, in storage order.
    Wildcard(MessageMap),
}

impl Lookup {
    /// Returns `true` if the lookup found nothing.
    ///
    /// A wildcard lookup is empty only when no stored key matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Literal(messages) => messages.is_empty(),
            Self::Wildcard(matches) => matches.is_empty(),
        }
    }

    /// Returns `true` if this came from a wildcard key.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard(_))
    }

    /// Returns the first message, looking one level into wildcard matches.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        let first = match self {
            Self::Literal(messages) => messages.first(),
            Self::Wildcard(matches) => matches.values().next().and_then(|m| m.first()),
        };
        first.map(String::as_str)
    }

    /// Returns the flat sequence of a literal lookup.
    #[must_use]
    pub fn as_literal(&self) -> Option<&[String]> {
        match self {
            Self::Literal(messages) => Some(messages),
            Self::Wildcard(_) => None,
        }
    }

    /// Returns the grouped matches of a wildcard lookup.
    #[must_use]
    pub const fn as_wildcard(&self) -> Option<&MessageMap> {
        match self {
            Self::Wildcard(matches) => Some(matches),
            Self::Literal(_) => None,
        }
    }

    /// Flattens either shape into one sequence, in order.
    #[must_use]
    pub fn into_flat(self) -> Vec<String> {
        match self {
            Self::Literal(messages) => messages,
            Self::Wildcard(matches) => matches.into_values().flatten().collect(),
        }
    }
}

impl Default for Lookup {
    fn default() -> Self {
        Self::Literal(Vec::new())
    }
}
