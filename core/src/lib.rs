//! # Provisioning Core
//!
//! Everything between the operator's answers and the fleet tool's command line.
//!
//! * **[`domain`]**: pure models and rules (address and hostname sequences,
//!   environment tiers, the selection record).
//! * **[`ports`]**: traits for the outside world (fleet tool, prompts, DNS).
//! * **[`adapters`]**: the `knife` and system-resolver implementations.
//! * **[`application`]**: the wizard, the dispatcher and the service tying
//!   them together.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
