pub mod create;
pub mod plan;

use clap::{ArgAction, Args, Parser, Subcommand};
use provision_common::config::{Config, DEFAULT_DOC_URL, FleetSettings};

#[derive(Parser)]
#[command(name = "provision-vms")]
#[command(about = "Menu-driven VM provisioning for xenserver pools.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less decoration; repeat to only show warnings
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Print the create and tag commands instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(flatten)]
    pub fleet: FleetArgs,
}

#[derive(Args)]
pub struct FleetArgs {
    /// Fleet-management executable
    #[arg(long, env = "PROVISION_FLEET_BIN", default_value = "knife", global = true)]
    pub fleet_bin: String,

    /// Account the template password belongs to
    #[arg(long, env = "PROVISION_ADMIN_USER", default_value = "root", global = true)]
    pub admin_user: String,

    /// Hostnames starting with this prefix are tagged after creation
    #[arg(long, env = "PROVISION_TAG_PREFIX", default_value = "lv", global = true)]
    pub tag_prefix: String,

    /// Tag applied to those hosts
    #[arg(long, env = "PROVISION_TAG", default_value = "upgrade-hq5", global = true)]
    pub tag: String,

    /// Netmask offered when prompting
    #[arg(long, env = "PROVISION_NETMASK", default_value = "255.255.255.0", global = true)]
    pub default_netmask: String,

    /// Gateway offered when prompting
    #[arg(long, env = "PROVISION_GATEWAY", default_value = "10.90.0.1", global = true)]
    pub default_gateway: String,

    /// Documentation link shown under the banner
    #[arg(long, env = "PROVISION_DOC_URL", default_value = DEFAULT_DOC_URL, global = true)]
    pub doc_url: String,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Walk through the menus and create the VMs (the default)
    #[command(alias = "c")]
    Create,
    /// Show the hostnames and addresses a run would produce
    #[command(alias = "p")]
    Plan {
        /// First hostname, ending in a number when more than one VM is wanted
        hostname: String,
        /// Address of the first VM
        ip: String,
        /// How many VMs
        #[arg(default_value = "1")]
        count: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            dry_run: self.dry_run,
        }
    }

    pub fn fleet_settings(&self) -> FleetSettings {
        FleetSettings {
            fleet_bin: self.fleet.fleet_bin.clone(),
            admin_user: self.fleet.admin_user.clone(),
            tag_prefix: self.fleet.tag_prefix.clone(),
            tag: self.fleet.tag.clone(),
            default_netmask: self.fleet.default_netmask.clone(),
            default_gateway: self.fleet.default_gateway.clone(),
            doc_url: self.fleet.doc_url.clone(),
        }
    }
}
