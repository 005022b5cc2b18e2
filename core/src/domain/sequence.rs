//! Expansion of one hostname/address seed into a run of numbered VMs.

use std::fmt;
use std::net::Ipv4Addr;

use provision_common::{ProvisionError, Result};

use super::{address, hostname};

/// One VM to create: its name and the address it gets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostPair {
    pub hostname: String,
    pub ip: Ipv4Addr,
}

impl HostPair {
    pub fn new(hostname: impl Into<String>, ip: Ipv4Addr) -> Self {
        Self {
            hostname: hostname.into(),
            ip,
        }
    }
}

impl fmt::Display for HostPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hostname, self.ip)
    }
}

/// Parses the operator's VM count. Empty input is not accepted here, callers
/// apply their default before this point.
pub fn parse_count(input: &str) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(ProvisionError::InvalidCount(input.trim().to_string())),
    }
}

/// Generates `count` pairs starting at (`hostname`, `ip`).
///
/// Each address and each hostname is the successor of the one before it, so
/// pair `i` is the seed advanced `i` times. A single VM never needs a
/// successor, so a hostname without a number is only an error for `count > 1`.
pub fn generate_pairs(ip: Ipv4Addr, hostname: &str, count: usize) -> Result<Vec<HostPair>> {
    if count == 0 {
        return Err(ProvisionError::InvalidCount(count.to_string()));
    }

    let mut pairs: Vec<HostPair> = Vec::with_capacity(count);
    pairs.push(HostPair::new(hostname, ip));

    for _ in 1..count {
        let Some(last) = pairs.last() else {
            break;
        };
        let next = HostPair::new(
            hostname::increment_hostname(&last.hostname)?,
            address::increment(last.ip)?,
        );
        pairs.push(next);
    }

    Ok(pairs)
}
