use provision_common::config::FleetSettings;

use crate::application::dispatch::{DispatchReport, Dispatcher};
use crate::application::wizard::Wizard;
use crate::domain::selection::ProvisionRequest;
use crate::domain::sequence::{self, HostPair};
use crate::ports::fleet::FleetTool;
use crate::ports::prompt::Prompter;
use crate::ports::resolver::HostResolver;

/// The operator's answers plus the VMs they expand to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub request: ProvisionRequest,
    pub pairs: Vec<HostPair>,
}

/// A full provisioning run: ask, expand, create.
///
/// Split in two so the caller can show the plan before anything is created.
pub struct ProvisionService {
    fleet: Box<dyn FleetTool>,
    prompter: Box<dyn Prompter>,
    resolver: Box<dyn HostResolver>,
    settings: FleetSettings,
}

impl ProvisionService {
    pub fn new(
        fleet: Box<dyn FleetTool>,
        prompter: Box<dyn Prompter>,
        resolver: Box<dyn HostResolver>,
        settings: FleetSettings,
    ) -> Self {
        Self {
            fleet,
            prompter,
            resolver,
            settings,
        }
    }

    /// Runs the wizard and expands the seed host into `count` pairs.
    pub fn prepare(&self) -> anyhow::Result<Plan> {
        let wizard = Wizard::new(
            self.prompter.as_ref(),
            self.fleet.as_ref(),
            self.resolver.as_ref(),
            &self.settings,
        );
        let request = wizard.collect()?;
        let pairs = sequence::generate_pairs(
            request.seed.ip,
            &request.seed.hostname,
            request.selection.count,
        )?;

        Ok(Plan { request, pairs })
    }

    pub fn execute(&self, plan: &Plan) -> anyhow::Result<DispatchReport> {
        Dispatcher::new(self.fleet.as_ref(), &self.settings.tag_prefix)
            .dispatch(&plan.pairs, &plan.request.selection)
    }

    pub fn run(&self) -> anyhow::Result<(Plan, DispatchReport)> {
        let plan = self.prepare()?;
        let report = self.execute(&plan)?;
        Ok((plan, report))
    }
}
