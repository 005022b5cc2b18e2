//! # Ports
//!
//! Traits isolating the application from the terminal, the fleet tool and DNS.
//! The application depends on these; [`crate::adapters`] and the CLI implement
//! them, and tests swap in fakes.

pub mod fleet;
pub mod prompt;
pub mod resolver;
