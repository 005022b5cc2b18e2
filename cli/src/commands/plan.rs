use provision_common::config::{Config, FleetSettings};
use provision_core::domain::address;
use provision_core::domain::sequence::{self, HostPair};
use provision_core::domain::tier::EnvironmentTier;

use crate::mprint;
use crate::terminal::{format, print};

/// Previews a run without prompting or touching the fleet.
pub fn plan(
    hostname: &str,
    ip: &str,
    count: &str,
    settings: &FleetSettings,
    cfg: &Config,
) -> anyhow::Result<()> {
    let ip = address::parse_ipv4("address", ip)?;
    let count: usize = sequence::parse_count(count)?;
    let pairs: Vec<HostPair> = sequence::generate_pairs(ip, hostname, count)?;
    let tier = EnvironmentTier::classify(hostname);

    print::GLOBAL_KEY_WIDTH.set(12);
    print::aligned_line("Tier", tier.name());
    print::aligned_line("Environments", format!("*{}", tier.suffix()));
    print::aligned_line("VMs", pairs.len().to_string());
    mprint!();
    format::print_pairs(&pairs, &settings.tag_prefix);

    if cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(())
}
