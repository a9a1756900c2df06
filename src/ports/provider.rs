//! Port for anything that carries a message bag.

use crate::domain::MessageBag;

/// Capability for types that hold a [`MessageBag`].
///
/// Validators, form requests, and error responses implement this so their
/// messages can be merged into another bag with
/// [`MessageBag::merge_from`] without exposing their internals.
///
/// # Examples
///
/// ```
/// use message_bag::{MessageBag, MessageProvider};
///
/// struct SignupErrors {
///     bag: MessageBag,
/// }
///
/// impl MessageProvider for SignupErrors {
///     fn message_bag(&self) -> &MessageBag {
///         &self.bag
///     }
/// }
///
/// let errors = SignupErrors {
///     bag: MessageBag::new([("email", "is required")]),
/// };
/// let mut all = MessageBag::default();
/// all.merge_from(&errors);
/// assert_eq!(all.first(Some("email"), None), "is required");
/// ```
pub trait MessageProvider {
    /// Returns the bag holding this value's messages.
    fn message_bag(&self) -> &MessageBag;
}

impl MessageProvider for MessageBag {
    fn message_bag(&self) -> &MessageBag {
        self
    }
}

impl<T: MessageProvider + ?Sized> MessageProvider for &T {
    fn message_bag(&self) -> &MessageBag {
        (**self).message_bag()
    }
}

impl<T: MessageProvider + ?Sized> MessageProvider for Box<T> {
    fn message_bag(&self) -> &MessageBag {
        (**self).message_bag()
    }
}
