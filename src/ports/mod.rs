//! Capability traits implemented by types that expose messages.

pub mod provider;

pub use provider::MessageProvider;
