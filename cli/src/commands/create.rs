use std::time::{Duration, Instant};

use colored::*;
use provision_common::config::{Config, FleetSettings};
use provision_common::success;
use provision_core::adapters::dns::SystemResolver;
use provision_core::adapters::knife::KnifeFleet;
use provision_core::application::dispatch::DispatchReport;
use provision_core::application::provision::{Plan, ProvisionService};

use crate::mprint;
use crate::terminal::menu::ConsolePrompter;
use crate::terminal::spinner::SpinnerFleet;
use crate::terminal::{colors, format, print};

pub fn create(cfg: &Config, settings: FleetSettings) -> anyhow::Result<()> {
    let tag_prefix: String = settings.tag_prefix.clone();
    let fleet = SpinnerFleet::new(KnifeFleet::new(&settings, cfg.dry_run));
    let service = ProvisionService::new(
        Box::new(fleet),
        Box::new(ConsolePrompter::new()),
        Box::new(SystemResolver),
        settings,
    );

    let plan: Plan = service.prepare()?;
    print_plan(&plan, &tag_prefix, cfg);

    print::header("provisioning", cfg.quiet);
    let start_time: Instant = Instant::now();
    let report: DispatchReport = service.execute(&plan)?;

    print_summary(&report, start_time.elapsed(), cfg);
    Ok(())
}

fn print_plan(plan: &Plan, tag_prefix: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::header("provisioning plan", cfg.quiet);
    format::print_selection(&plan.request.selection);
    print::aligned_line("Tier", plan.request.tier.name());
    mprint!();
    format::print_pairs(&plan.pairs, tag_prefix);
}

fn print_summary(report: &DispatchReport, total_time: Duration, cfg: &Config) {
    let created: ColoredString = format!("{} created", report.created).bold().green();
    let failed: ColoredString = if report.failed > 0 {
        format!("{} failed", report.failed).bold().red()
    } else {
        format!("{} failed", report.failed).normal()
    };
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    let output: ColoredString = if cfg.dry_run {
        format!("Dry run: {} commands shown, nothing was run", report.skipped)
            .color(colors::TEXT_DEFAULT)
    } else {
        format!("Provisioning complete: {created}, {failed} in {total_time}")
            .color(colors::TEXT_DEFAULT)
    };

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
            if report.tagged + report.tag_failed > 0 {
                print::centerln(&format!(
                    "{} tagged, {} tag failures",
                    report.tagged, report.tag_failed
                ));
            }
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
