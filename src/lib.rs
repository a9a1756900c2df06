//! Message bag: keyed, deduplicated validation messages.
//!
//! This crate provides the collection that validators fill and presenters
//! render. Messages are grouped under string keys (usually field paths such
//! as `address.city` or `items.0.name`), kept unique per key on insertion,
//! and rendered through a `:message`/`:key` template on read.
//!
//! # Architecture
//!
//! - **Domain**: the [`MessageBag`] value and its supporting types
//! - **Ports**: the [`MessageProvider`] capability for anything carrying a bag
//! - **Matching**: wildcard key patterns used by keyed lookups
//!
//! Evaluating validation rules and translating messages happen elsewhere;
//! this crate only stores and presents their output.
//!
//! # Example
//!
//! ```
//! use message_bag::MessageBag;
//!
//! let mut errors = MessageBag::default();
//! errors
//!     .add("items.0.name", "The name is required.")
//!     .add("items.1.name", "The name is too long.")
//!     .set_format(":key: :message");
//!
//! assert!(errors.has("items.*.name"));
//! assert_eq!(errors.first(Some("items.*.name"), None), "items.0.name: The name is required.");
//! assert_eq!(
//!     errors.to_string(),
//!     r#"{"items.0.name":["The name is required."],"items.1.name":["The name is too long."]}"#,
//! );
//! ```

pub mod domain;
pub mod error;
pub mod matching;
pub mod ports;

pub use domain::{Lookup, MessageBag, MessageFormat, MessageMap, Messages};
pub use error::{MessageBagError, MessageBagResult};
pub use ports::MessageProvider;

#[cfg(test)]
mod tests;
