use anyhow::Context;
use provision_common::config::FleetSettings;
use provision_common::{ProvisionError, info};

use crate::domain::address;
use crate::domain::selection::{Password, ProvisionRequest, SelectionContext};
use crate::domain::sequence::{self, HostPair};
use crate::domain::tier::EnvironmentTier;
use crate::ports::fleet::FleetTool;
use crate::ports::prompt::{Layout, Prompter};
use crate::ports::resolver::HostResolver;

pub const DEFAULT_HOSTNAME: &str = "none";
pub const DEFAULT_COUNT: &str = "1";
pub const CPU_CHOICES: [u32; 4] = [2, 4, 6, 8];
pub const MEMORY_CHOICES_MB: [u32; 3] = [2048, 4096, 8192];
pub const DATACENTER_ROLES: [&str; 4] = ["lvdefault", "dfdefault", "dubdefault", "londefault"];

/// Walks the operator through every question of a provisioning run.
///
/// The order matters: the address comes from DNS before the network
/// questions mention it, and the environment list depends on both the
/// hostname's tier and the chosen config role.
pub struct Wizard<'a> {
    prompter: &'a dyn Prompter,
    fleet: &'a dyn FleetTool,
    resolver: &'a dyn HostResolver,
    settings: &'a FleetSettings,
}

impl<'a> Wizard<'a> {
    pub fn new(
        prompter: &'a dyn Prompter,
        fleet: &'a dyn FleetTool,
        resolver: &'a dyn HostResolver,
        settings: &'a FleetSettings,
    ) -> Self {
        Self {
            prompter,
            fleet,
            resolver,
            settings,
        }
    }

    pub fn collect(&self) -> anyhow::Result<ProvisionRequest> {
        let hostname: String = self
            .prompter
            .ask("Hostname?", DEFAULT_HOSTNAME)?
            .trim()
            .to_string();
        let ip = self
            .resolver
            .resolve(&hostname)
            .with_context(|| {
                format!("a DNS record for '{hostname}' must exist before provisioning")
            })?;
        info!("{hostname} resolves to {ip}");

        let netmask = self
            .prompter
            .ask(&format!("What is the NETMASK of {ip}?"), &self.settings.default_netmask)?;
        let gateway = self
            .prompter
            .ask(&format!("What is the GATEWAY of {ip}?"), &self.settings.default_gateway)?;
        let mut builder = SelectionContext::builder()
            .netmask(address::parse_ipv4("netmask", &netmask)?)
            .gateway(address::parse_ipv4("gateway", &gateway)?);

        info!("Gathering the list of VLANs to choose from");
        let vlans = self.fleet.list_vlans()?;
        builder = builder.network(self.pick(
            "VLANs",
            "Please select the proper VLAN:",
            &vlans,
            Layout::Columns,
        )?);

        builder = builder
            .cpus(self.pick_number("CPU counts", "How many CPUs would you like?", &CPU_CHOICES)?)
            .memory_mb(self.pick_number(
                "memory sizes",
                "How much memory would you like?",
                &MEMORY_CHOICES_MB,
            )?);

        info!("Gathering the list of templates to choose from");
        let templates = self.fleet.list_templates()?;
        builder = builder.template(self.pick(
            "templates",
            "Please select the template you would like to use:",
            &templates,
            Layout::List,
        )?);

        let datacenter_roles: Vec<String> =
            DATACENTER_ROLES.iter().map(|r| r.to_string()).collect();
        builder = builder.datacenter_role(self.pick(
            "datacenter roles",
            "What datacenter role would you like to apply?",
            &datacenter_roles,
            Layout::List,
        )?);

        let roles = self.fleet.list_roles()?;
        let config_role = self.pick(
            "roles",
            "Please select the chef role:",
            &roles,
            Layout::Columns,
        )?;

        let tier = EnvironmentTier::classify(&hostname);
        info!("{hostname} is a {tier} host, offering *{} environments", tier.suffix());
        let environments = self.fleet.list_environments(&config_role, tier.suffix())?;
        let environment = self.pick(
            "environments",
            "Please select the chef environment:",
            &environments,
            Layout::Columns,
        )?;
        builder = builder.config_role(config_role).environment(environment);

        let count = self
            .prompter
            .ask("Please enter how many VMs you want:", DEFAULT_COUNT)?;
        builder = builder.count(sequence::parse_count(&count)?);

        let password = self
            .prompter
            .ask_secret("Enter the root password of the template:")?;
        builder = builder.password(Password::new(password));

        Ok(ProvisionRequest {
            seed: HostPair::new(hostname, ip),
            tier,
            selection: builder.build()?,
        })
    }

    /// Presents a menu, refusing outright when there is nothing to present.
    fn pick(
        &self,
        what: &str,
        prompt: &str,
        options: &[String],
        layout: Layout,
    ) -> anyhow::Result<String> {
        if options.is_empty() {
            return Err(ProvisionError::EmptyChoices(what.to_string()).into());
        }
        self.prompter.choose(prompt, options, layout)
    }

    fn pick_number(&self, what: &str, prompt: &str, choices: &[u32]) -> anyhow::Result<u32> {
        let options: Vec<String> = choices.iter().map(u32::to_string).collect();
        let chosen = self.pick(what, prompt, &options, Layout::List)?;
        chosen
            .parse::<u32>()
            .with_context(|| format!("'{chosen}' is not one of the offered {what}"))
    }
}
