use std::net::Ipv4Addr;

/// Hostname to address lookup, done once at the start of a run.
pub trait HostResolver {
    fn resolve(&self, hostname: &str) -> anyhow::Result<Ipv4Addr>;
}
