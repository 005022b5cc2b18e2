use std::net::Ipv4Addr;

use super::selection::{Password, SelectionContext};
use super::sequence::HostPair;

/// Everything the fleet tool needs to create one VM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmSpec {
    pub name: String,
    pub ip: Ipv4Addr,
    pub gateway: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub cpus: u32,
    pub memory_mb: u32,
    pub template: String,
    pub environment: String,
    pub network: String,
    pub datacenter_role: String,
    pub config_role: String,
    pub password: Password,
}

impl VmSpec {
    pub fn new(pair: &HostPair, selection: &SelectionContext) -> Self {
        Self {
            name: pair.hostname.clone(),
            ip: pair.ip,
            gateway: selection.gateway,
            netmask: selection.netmask,
            cpus: selection.cpus,
            memory_mb: selection.memory_mb,
            template: selection.template.clone(),
            environment: selection.environment.clone(),
            network: selection.network.clone(),
            datacenter_role: selection.datacenter_role.clone(),
            config_role: selection.config_role.clone(),
            password: selection.password.clone(),
        }
    }

    /// Run list in the `role[a],role[b]` form configuration management expects.
    pub fn run_list(&self) -> String {
        format!("role[{}],role[{}]", self.datacenter_role, self.config_role)
    }
}
