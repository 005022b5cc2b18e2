use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs};

use provision_common::{ProvisionError, debug};

use crate::ports::resolver::HostResolver;

/// Resolves through the operating system (`getaddrinfo`), the same lookup
/// every other tool on the box uses.
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn resolve(&self, hostname: &str) -> anyhow::Result<Ipv4Addr> {
        let addrs = (hostname, 0)
            .to_socket_addrs()
            .map_err(|e| ProvisionError::Resolution {
                hostname: hostname.to_string(),
                reason: e.to_string(),
            })?;

        let ips: Vec<IpAddr> = addrs.map(|addr| addr.ip()).collect();
        debug!("{hostname} resolved to {ips:?}");

        first_ipv4(&ips).ok_or_else(|| ProvisionError::NoIpv4Record(hostname.to_string()).into())
    }
}

fn first_ipv4(ips: &[IpAddr]) -> Option<Ipv4Addr> {
    ips.iter().find_map(|ip| match ip {
        IpAddr::V4(v4) => Some(*v4),
        IpAddr::V6(_) => None,
    })
}
