//! `knife` (with the xenserver plugin) as a [`FleetTool`].
//!
//! The tool is run directly, never through a shell, and its listing output is
//! filtered here rather than with `grep`/`awk` pipelines. The filters are
//! plain functions over the captured text so they can be checked without a
//! fleet.

use std::process::{Command, Stdio};

use provision_common::config::FleetSettings;
use provision_common::{ProvisionError, debug, info, warn};

use crate::domain::vm::VmSpec;
use crate::ports::fleet::{CommandOutcome, FleetTool};

const REDACTED: &str = "********";

pub struct KnifeFleet {
    program: String,
    admin_user: String,
    tag: String,
    dry_run: bool,
}

impl KnifeFleet {
    pub fn new(settings: &FleetSettings, dry_run: bool) -> Self {
        Self {
            program: settings.fleet_bin.clone(),
            admin_user: settings.admin_user.clone(),
            tag: settings.tag.clone(),
            dry_run,
        }
    }

    /// Runs a listing command and returns its stdout.
    ///
    /// A non-zero exit is only logged: whatever was printed is still used, and
    /// an empty result is left for the menu to refuse.
    fn capture(&self, args: &[&str]) -> anyhow::Result<String> {
        debug!("running {} {}", self.program, args.join(" "));
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            warn!(
                "'{} {}' exited with {}",
                self.program,
                args.join(" "),
                output.status
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Runs a mutating command with the tool's own output going to the terminal.
    fn execute(&self, args: Vec<String>) -> anyhow::Result<CommandOutcome> {
        let rendered = render_command(&self.program, &args);
        if self.dry_run {
            info!("{rendered}");
            return Ok(CommandOutcome::Skipped);
        }

        debug!("running {rendered}");
        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if status.success() {
            Ok(CommandOutcome::Succeeded)
        } else {
            Ok(CommandOutcome::Failed {
                code: status.code(),
            })
        }
    }

    fn spawn_error(&self, err: std::io::Error) -> ProvisionError {
        ProvisionError::Spawn {
            program: self.program.clone(),
            reason: err.to_string(),
        }
    }
}

impl FleetTool for KnifeFleet {
    fn list_vlans(&self) -> anyhow::Result<Vec<String>> {
        let output = self.capture(&["xenserver", "network", "list"])?;
        Ok(vlans_from(&output))
    }

    fn list_templates(&self) -> anyhow::Result<Vec<String>> {
        let output = self.capture(&["xenserver", "template", "list"])?;
        Ok(templates_from(&output))
    }

    fn list_roles(&self) -> anyhow::Result<Vec<String>> {
        let output = self.capture(&["role", "list"])?;
        Ok(roles_from(&output))
    }

    fn list_environments(&self, role: &str, tier_suffix: &str) -> anyhow::Result<Vec<String>> {
        let output = self.capture(&["environment", "list"])?;
        Ok(environments_from(&output, role, tier_suffix))
    }

    fn create_vm(&self, spec: &VmSpec) -> anyhow::Result<CommandOutcome> {
        self.execute(vm_create_args(spec, &self.admin_user))
    }

    fn tag_host(&self, hostname: &str) -> anyhow::Result<CommandOutcome> {
        self.execute(tag_args(hostname, &self.tag))
    }
}

/// Network labels: the second and third column of every `VLAN` line, sorted.
pub fn vlans_from(output: &str) -> Vec<String> {
    let mut vlans: Vec<String> = output
        .lines()
        .filter(|line| line.contains("VLAN"))
        .map(|line| {
            line.split_whitespace()
                .skip(1)
                .take(2)
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .filter(|label| !label.is_empty())
        .collect();
    vlans.sort();
    vlans
}

/// Template names: the second column of every `Base` line.
pub fn templates_from(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.contains("Base"))
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(String::from)
        .collect()
}

pub fn roles_from(output: &str) -> Vec<String> {
    non_empty_lines(output).map(String::from).collect()
}

/// Environment names containing `role` and ending with `tier_suffix`.
pub fn environments_from(output: &str, role: &str, tier_suffix: &str) -> Vec<String> {
    non_empty_lines(output)
        .filter(|env| env.contains(role) && env.ends_with(tier_suffix))
        .map(String::from)
        .collect()
}

fn non_empty_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().map(str::trim).filter(|line| !line.is_empty())
}

pub fn vm_create_args(spec: &VmSpec, admin_user: &str) -> Vec<String> {
    vec![
        "xenserver".into(),
        "vm".into(),
        "create".into(),
        "--vm-name".into(),
        spec.name.clone(),
        "--vm-ip".into(),
        spec.ip.to_string(),
        "--vm-gateway".into(),
        spec.gateway.to_string(),
        "--vm-netmask".into(),
        spec.netmask.to_string(),
        "--vm-cpus".into(),
        spec.cpus.to_string(),
        "--vm-memory".into(),
        spec.memory_mb.to_string(),
        "--vm-template".into(),
        spec.template.clone(),
        "--environment".into(),
        spec.environment.clone(),
        "-N".into(),
        spec.network.clone(),
        "-r".into(),
        spec.run_list(),
        "-x".into(),
        admin_user.to_string(),
        "-P".into(),
        spec.password.expose().to_string(),
    ]
}

pub fn tag_args(hostname: &str, tag: &str) -> Vec<String> {
    vec![
        "tag".into(),
        "create".into(),
        hostname.to_string(),
        tag.to_string(),
    ]
}

/// Renders a command line for display, hiding the value after `-P`.
pub fn render_command(program: &str, args: &[String]) -> String {
    let mut parts: Vec<String> = vec![program.to_string()];
    let mut hide_next = false;

    for arg in args {
        if hide_next {
            parts.push(REDACTED.to_string());
            hide_next = false;
            continue;
        }
        hide_next = arg == "-P";
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            parts.push(format!("\"{arg}\""));
        } else {
            parts.push(arg.clone());
        }
    }

    parts.join(" ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
