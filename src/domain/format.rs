//! Render templates applied to raw messages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder replaced with the raw message text.
pub const MESSAGE_PLACEHOLDER: &str = ":message";

/// Placeholder replaced with the key the message belongs to.
pub const KEY_PLACEHOLDER: &str = ":key";

/// Template used to render a message for display.
///
/// The template may contain [`MESSAGE_PLACEHOLDER`] and [`KEY_PLACEHOLDER`].
/// Rendering replaces `:message` first and then `:key`, so a `:key` token
/// inside the message text is substituted too.
///
/// # Examples
///
/// ```
/// use message_bag::domain::MessageFormat;
///
/// let format = MessageFormat::new("<li data-field=\":key\">:message</li>");
/// assert_eq!(
///     format.render("is required", "email"),
///     "<li data-field=\"email\">is required</li>",
/// );
/// assert!(MessageFormat::default().is_passthrough());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageFormat(String);

impl MessageFormat {
    /// Creates a format from a template string.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Returns the template string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the template renders messages unchanged.
    #[must_use]
    pub fn is_passthrough(&self) -> bool {
        self.0 == MESSAGE_PLACEHOLDER
    }

    /// Renders `message` under `key` through this template.
    #[must_use]
    pub fn render(&self, message: &str, key: &str) -> String {
        render_template(&self.0, message, key)
    }
}

impl Default for MessageFormat {
    fn default() -> Self {
        Self(MESSAGE_PLACEHOLDER.to_owned())
    }
}

impl From<&str> for MessageFormat {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for MessageFormat {
    fn from(template: String) -> Self {
        Self(template)
    }
}

impl AsRef<str> for MessageFormat {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replaces every `:message`, then every `:key` in the result.
///
/// Message text is not escaped, so a `:key` inside the message is filled in
/// as well.
pub(crate) fn render_template(template: &str, message: &str, key: &str) -> String {
    template
        .replace(MESSAGE_PLACEHOLDER, message)
        .replace(KEY_PLACEHOLDER, key)
}
