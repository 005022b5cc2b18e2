//! The record of everything the operator picked during one run.

use std::fmt;
use std::net::Ipv4Addr;

use provision_common::{ProvisionError, Result};

use super::sequence::HostPair;
use super::tier::EnvironmentTier;

/// Template root password. `Debug` never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(********)")
    }
}

/// Immutable answers shared by every VM of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionContext {
    pub network: String,
    pub gateway: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub cpus: u32,
    pub memory_mb: u32,
    pub template: String,
    pub datacenter_role: String,
    pub config_role: String,
    pub environment: String,
    pub count: usize,
    pub password: Password,
}

impl SelectionContext {
    pub fn builder() -> SelectionBuilder {
        SelectionBuilder::default()
    }
}

/// Collects answers one prompt at a time. [`build`](Self::build) refuses to
/// produce a context with a gap in it.
#[derive(Debug, Default, Clone)]
pub struct SelectionBuilder {
    network: Option<String>,
    gateway: Option<Ipv4Addr>,
    netmask: Option<Ipv4Addr>,
    cpus: Option<u32>,
    memory_mb: Option<u32>,
    template: Option<String>,
    datacenter_role: Option<String>,
    config_role: Option<String>,
    environment: Option<String>,
    count: Option<usize>,
    password: Option<Password>,
}

impl SelectionBuilder {
    pub fn network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn gateway(mut self, gateway: Ipv4Addr) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn netmask(mut self, netmask: Ipv4Addr) -> Self {
        self.netmask = Some(netmask);
        self
    }

    pub fn cpus(mut self, cpus: u32) -> Self {
        self.cpus = Some(cpus);
        self
    }

    pub fn memory_mb(mut self, memory_mb: u32) -> Self {
        self.memory_mb = Some(memory_mb);
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn datacenter_role(mut self, role: impl Into<String>) -> Self {
        self.datacenter_role = Some(role.into());
        self
    }

    pub fn config_role(mut self, role: impl Into<String>) -> Self {
        self.config_role = Some(role.into());
        self
    }

    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    pub fn build(self) -> Result<SelectionContext> {
        Ok(SelectionContext {
            network: self.network.ok_or(ProvisionError::MissingSelection("network"))?,
            gateway: self.gateway.ok_or(ProvisionError::MissingSelection("gateway"))?,
            netmask: self.netmask.ok_or(ProvisionError::MissingSelection("netmask"))?,
            cpus: self.cpus.ok_or(ProvisionError::MissingSelection("CPU count"))?,
            memory_mb: self
                .memory_mb
                .ok_or(ProvisionError::MissingSelection("memory size"))?,
            template: self.template.ok_or(ProvisionError::MissingSelection("template"))?,
            datacenter_role: self
                .datacenter_role
                .ok_or(ProvisionError::MissingSelection("datacenter role"))?,
            config_role: self
                .config_role
                .ok_or(ProvisionError::MissingSelection("config role"))?,
            environment: self
                .environment
                .ok_or(ProvisionError::MissingSelection("environment"))?,
            count: self.count.ok_or(ProvisionError::MissingSelection("VM count"))?,
            password: self.password.ok_or(ProvisionError::MissingSelection("password"))?,
        })
    }
}

/// What the wizard hands over: the seed host, its tier and the shared answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    pub seed: HostPair,
    pub tier: EnvironmentTier,
    pub selection: SelectionContext,
}
