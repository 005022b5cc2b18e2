//! # Application Layer
//!
//! Orchestrates the domain rules and the ports. No parsing rules or command
//! lines live here, only the order in which things happen.
//!
//! * [`wizard::Wizard`]: asks the operator everything, one prompt at a time.
//! * [`dispatch::Dispatcher`]: creates (and tags) one VM per generated pair.
//! * [`provision::ProvisionService`]: the whole run, start to finish.

pub mod dispatch;
pub mod provision;
pub mod wizard;
