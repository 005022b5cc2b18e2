use provision_common::{info, success, warn};

use crate::domain::selection::SelectionContext;
use crate::domain::sequence::HostPair;
use crate::domain::vm::VmSpec;
use crate::ports::fleet::{CommandOutcome, FleetTool};

/// Tally of one dispatch pass, for the closing summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub created: usize,
    pub failed: usize,
    pub tagged: usize,
    pub tag_failed: usize,
    /// Commands shown but not run (dry run).
    pub skipped: usize,
}

/// Creates the VMs one after another.
///
/// A command that exits non-zero is logged and counted, then the next VM is
/// attempted; there are no retries and nothing is rolled back. Tagging is
/// decided per VM from that VM's own hostname.
pub struct Dispatcher<'a> {
    fleet: &'a dyn FleetTool,
    tag_prefix: &'a str,
}

impl<'a> Dispatcher<'a> {
    pub fn new(fleet: &'a dyn FleetTool, tag_prefix: &'a str) -> Self {
        Self { fleet, tag_prefix }
    }

    pub fn is_tag_eligible(&self, hostname: &str) -> bool {
        is_tag_eligible(hostname, self.tag_prefix)
    }

    pub fn dispatch(
        &self,
        pairs: &[HostPair],
        selection: &SelectionContext,
    ) -> anyhow::Result<DispatchReport> {
        let mut report = DispatchReport::default();

        for (idx, pair) in pairs.iter().enumerate() {
            info!("[{}/{}] creating {pair}", idx + 1, pairs.len());
            let spec = VmSpec::new(pair, selection);

            match self.fleet.create_vm(&spec)? {
                CommandOutcome::Succeeded => {
                    report.created += 1;
                    success!("{} created", pair.hostname);
                }
                CommandOutcome::Failed { code } => {
                    report.failed += 1;
                    warn!("creating {} failed ({})", pair.hostname, describe_exit(code));
                }
                CommandOutcome::Skipped => report.skipped += 1,
            }

            if !self.is_tag_eligible(&pair.hostname) {
                continue;
            }

            match self.fleet.tag_host(&pair.hostname)? {
                CommandOutcome::Succeeded => report.tagged += 1,
                CommandOutcome::Failed { code } => {
                    report.tag_failed += 1;
                    warn!("tagging {} failed ({})", pair.hostname, describe_exit(code));
                }
                CommandOutcome::Skipped => report.skipped += 1,
            }
        }

        Ok(report)
    }
}

/// A host gets the extra tag when its own name starts with `tag_prefix`.
/// An empty prefix tags nothing.
pub fn is_tag_eligible(hostname: &str, tag_prefix: &str) -> bool {
    !tag_prefix.is_empty() && hostname.starts_with(tag_prefix)
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => String::from("terminated by signal"),
    }
}
