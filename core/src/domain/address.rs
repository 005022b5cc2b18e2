use std::net::Ipv4Addr;

use provision_common::{ProvisionError, Result};

/// Parses operator input as an IPv4 address, naming `field` on failure.
pub fn parse_ipv4(field: &'static str, value: &str) -> Result<Ipv4Addr> {
    value
        .trim()
        .parse::<Ipv4Addr>()
        .map_err(|_| ProvisionError::InvalidAddress {
            field,
            value: value.to_string(),
        })
}

/// Returns the next address, carrying across octets.
///
/// There is nothing after `255.255.255.255`; asking for it is an error rather
/// than a wrap to `0.0.0.0`.
pub fn increment(addr: Ipv4Addr) -> Result<Ipv4Addr> {
    let value: u32 = addr.into();
    value
        .checked_add(1)
        .map(Ipv4Addr::from)
        .ok_or(ProvisionError::AddressSpaceExhausted(addr))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
