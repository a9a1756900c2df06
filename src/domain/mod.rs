//! Domain types for the message bag.
//!
//! These are plain values with no I/O. A bag is owned by one logical
//! operation at a time; callers sharing one across threads must wrap it in
//! their own synchronisation.

mod format;
mod lookup;
mod message_bag;
mod messages;

pub use format::{KEY_PLACEHOLDER, MESSAGE_PLACEHOLDER, MessageFormat};
pub use lookup::Lookup;
pub use message_bag::{MessageBag, MessageMap};
pub use messages::Messages;
