//! Unit tests for the message bag.
//!
//! Tests are organised by concern, covering happy paths, edge cases, and
//! the boundary errors raised for malformed input.

mod serde_tests;
mod wildcard_tests;
