use indicatif::ProgressStyle;
use provision_core::domain::vm::VmSpec;
use provision_core::ports::fleet::{CommandOutcome, FleetTool};
use tracing::info_span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// Shows a spinner for as long as `job` runs.
pub fn with_spinner<T>(msg: &str, job: impl FnOnce() -> T) -> T {
    let span = info_span!("fleet", indicatif.pb_show = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(msg);
    let _guard = span.enter();
    job()
}

/// Wraps a [`FleetTool`] so the slow listing calls show a spinner.
///
/// Create and tag commands pass straight through: the tool prints its own
/// progress for those and a spinner would only garble it.
pub struct SpinnerFleet<F> {
    inner: F,
}

impl<F: FleetTool> SpinnerFleet<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: FleetTool> FleetTool for SpinnerFleet<F> {
    fn list_vlans(&self) -> anyhow::Result<Vec<String>> {
        with_spinner("Waiting for the pool's network list...", || {
            self.inner.list_vlans()
        })
    }

    fn list_templates(&self) -> anyhow::Result<Vec<String>> {
        with_spinner("Waiting for the pool's template list...", || {
            self.inner.list_templates()
        })
    }

    fn list_roles(&self) -> anyhow::Result<Vec<String>> {
        with_spinner("Waiting for the role list...", || self.inner.list_roles())
    }

    fn list_environments(&self, role: &str, tier_suffix: &str) -> anyhow::Result<Vec<String>> {
        with_spinner("Waiting for the environment list...", || {
            self.inner.list_environments(role, tier_suffix)
        })
    }

    fn create_vm(&self, spec: &VmSpec) -> anyhow::Result<CommandOutcome> {
        self.inner.create_vm(spec)
    }

    fn tag_host(&self, hostname: &str) -> anyhow::Result<CommandOutcome> {
        self.inner.tag_host(hostname)
    }
}
