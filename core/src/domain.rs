//! # Domain Layer
//!
//! Pure Rust, no IO. Every rule here is a plain function or value type so it
//! can be checked without a terminal or a fleet to talk to.

pub mod address;
pub mod hostname;
pub mod selection;
pub mod sequence;
pub mod tier;
pub mod vm;
