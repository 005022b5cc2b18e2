use crate::domain::vm::VmSpec;

/// How a fleet command ended.
///
/// Only a failure to launch the tool is an `Err`; a command that ran and
/// exited non-zero is a normal [`Failed`](Self::Failed) outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Succeeded,
    Failed { code: Option<i32> },
    /// Dry run: the command was shown, not executed.
    Skipped,
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Succeeded)
    }
}

/// Typed view of the fleet-management tool.
///
/// List operations return trimmed, non-empty entries in the order the tool
/// printed them. An empty list is a valid answer; deciding what to do with
/// it is up to the caller.
pub trait FleetTool {
    fn list_vlans(&self) -> anyhow::Result<Vec<String>>;

    fn list_templates(&self) -> anyhow::Result<Vec<String>>;

    fn list_roles(&self) -> anyhow::Result<Vec<String>>;

    /// Environments whose name contains `role` and ends with `tier_suffix`.
    fn list_environments(&self, role: &str, tier_suffix: &str) -> anyhow::Result<Vec<String>>;

    fn create_vm(&self, spec: &VmSpec) -> anyhow::Result<CommandOutcome>;

    fn tag_host(&self, hostname: &str) -> anyhow::Result<CommandOutcome>;
}
