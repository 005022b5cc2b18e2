//! Shared pieces of the provisioning workspace: run configuration, the error
//! taxonomy and the logging macros every crate prints through.

pub mod config;
pub mod error;
pub mod log;

pub use error::{ProvisionError, Result};

#[doc(hidden)]
pub use tracing;
