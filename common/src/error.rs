use std::net::Ipv4Addr;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProvisionError>;

/// Every way a provisioning run can be refused.
///
/// A fleet command exiting non-zero is absent on purpose: those are logged
/// and the run carries on with the next VM.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProvisionError {
    #[error("invalid {field} '{value}': not an IPv4 address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("could not resolve '{hostname}': {reason}")]
    Resolution { hostname: String, reason: String },

    #[error("'{0}' has no IPv4 address in DNS")]
    NoIpv4Record(String),

    #[error("invalid VM count '{0}': expected a whole number of at least 1")]
    InvalidCount(String),

    #[error("no {0} available to choose from")]
    EmptyChoices(String),

    #[error("cannot go past {0}: end of the IPv4 address space")]
    AddressSpaceExhausted(Ipv4Addr),

    #[error("hostname '{0}' has no numeric suffix to increment")]
    NoNumericSuffix(String),

    #[error("selection is missing the {0}")]
    MissingSelection(&'static str),

    #[error("failed to launch '{program}': {reason}")]
    Spawn { program: String, reason: String },
}
