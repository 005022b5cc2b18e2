//! # Adapters
//!
//! Concrete implementations of [`crate::ports`] that touch the real world:
//! the `knife` executable and the system resolver. The terminal side lives in
//! the CLI crate.

pub mod dns;
pub mod knife;
