//! In-memory stand-ins for the terminal, the fleet tool and DNS.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::net::Ipv4Addr;
use std::rc::Rc;

use provision_common::ProvisionError;
use provision_core::adapters::knife;
use provision_core::domain::vm::VmSpec;
use provision_core::ports::fleet::{CommandOutcome, FleetTool};
use provision_core::ports::prompt::{Layout, Prompter};
use provision_core::ports::resolver::HostResolver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListVlans,
    ListTemplates,
    ListRoles,
    ListEnvironments { role: String, suffix: String },
    CreateVm(VmSpec),
    TagHost(String),
}

/// Shared record of fleet calls, readable after the fleet is boxed away.
#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn created(&self) -> Vec<VmSpec> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateVm(spec) => Some(spec),
                _ => None,
            })
            .collect()
    }

    pub fn tagged(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::TagHost(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn environment_queries(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::ListEnvironments { role, suffix } => Some((role, suffix)),
                _ => None,
            })
            .collect()
    }
}

pub const NETWORK_LIST: &str = "\
Name                             Tag
Pool-wide network eth0           -
pool VLAN-120 Frontend           120
pool VLAN-031 Backend            31
";

pub const TEMPLATE_LIST: &str = "\
 1  centos6-Base     CentOS 6 Base
 2  win2008          Windows
";

pub const ROLE_LIST: &str = "\
  base
  webapp
  search
";

pub const ENVIRONMENT_LIST: &str = "\
  _default
  webapp_dev
  webapp_sbx
  webapp_prod
  search_prod
";

/// Serves canned `knife` listings through the real output filters.
pub struct FakeFleet {
    pub log: CallLog,
    pub network_list: String,
    pub template_list: String,
    pub role_list: String,
    pub environment_list: String,
    pub failing_creates: Vec<String>,
}

impl FakeFleet {
    pub fn new() -> Self {
        Self {
            log: CallLog::default(),
            network_list: NETWORK_LIST.to_string(),
            template_list: TEMPLATE_LIST.to_string(),
            role_list: ROLE_LIST.to_string(),
            environment_list: ENVIRONMENT_LIST.to_string(),
            failing_creates: Vec::new(),
        }
    }
}

impl FleetTool for FakeFleet {
    fn list_vlans(&self) -> anyhow::Result<Vec<String>> {
        self.log.push(Call::ListVlans);
        Ok(knife::vlans_from(&self.network_list))
    }

    fn list_templates(&self) -> anyhow::Result<Vec<String>> {
        self.log.push(Call::ListTemplates);
        Ok(knife::templates_from(&self.template_list))
    }

    fn list_roles(&self) -> anyhow::Result<Vec<String>> {
        self.log.push(Call::ListRoles);
        Ok(knife::roles_from(&self.role_list))
    }

    fn list_environments(&self, role: &str, tier_suffix: &str) -> anyhow::Result<Vec<String>> {
        self.log.push(Call::ListEnvironments {
            role: role.to_string(),
            suffix: tier_suffix.to_string(),
        });
        Ok(knife::environments_from(&self.environment_list, role, tier_suffix))
    }

    fn create_vm(&self, spec: &VmSpec) -> anyhow::Result<CommandOutcome> {
        self.log.push(Call::CreateVm(spec.clone()));
        if self.failing_creates.contains(&spec.name) {
            Ok(CommandOutcome::Failed { code: Some(100) })
        } else {
            Ok(CommandOutcome::Succeeded)
        }
    }

    fn tag_host(&self, hostname: &str) -> anyhow::Result<CommandOutcome> {
        self.log.push(Call::TagHost(hostname.to_string()));
        Ok(CommandOutcome::Succeeded)
    }
}

/// Menus the operator was shown, in order.
#[derive(Clone, Default)]
pub struct MenuLog(Rc<RefCell<Vec<(String, Vec<String>)>>>);

impl MenuLog {
    pub fn options_for(&self, prompt_fragment: &str) -> Option<Vec<String>> {
        self.0
            .borrow()
            .iter()
            .find(|(prompt, _)| prompt.contains(prompt_fragment))
            .map(|(_, options)| options.clone())
    }
}

/// Replays answers in order. An empty answer to `ask` takes the default;
/// an answer to `choose` must be one of the offered labels.
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    pub menus: MenuLog,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            menus: MenuLog::default(),
        }
    }

    fn next(&self, question: &str) -> anyhow::Result<String> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script ran out of answers at '{question}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &str, default: &str) -> anyhow::Result<String> {
        let answer = self.next(question)?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    fn ask_secret(&self, question: &str) -> anyhow::Result<String> {
        self.next(question)
    }

    fn choose(&self, prompt: &str, options: &[String], _layout: Layout) -> anyhow::Result<String> {
        self.menus
            .0
            .borrow_mut()
            .push((prompt.to_string(), options.to_vec()));
        let answer = self.next(prompt)?;
        anyhow::ensure!(
            options.contains(&answer),
            "'{answer}' was not offered at '{prompt}': {options:?}"
        );
        Ok(answer)
    }
}

pub struct StaticResolver(pub HashMap<String, Ipv4Addr>);

impl StaticResolver {
    pub fn single(hostname: &str, ip: Ipv4Addr) -> Self {
        Self(HashMap::from([(hostname.to_string(), ip)]))
    }
}

impl HostResolver for StaticResolver {
    fn resolve(&self, hostname: &str) -> anyhow::Result<Ipv4Addr> {
        self.0.get(hostname).copied().ok_or_else(|| {
            ProvisionError::Resolution {
                hostname: hostname.to_string(),
                reason: String::from("Name or service not known"),
            }
            .into()
        })
    }
}
