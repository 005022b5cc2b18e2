use colored::*;
use provision_core::application::dispatch;
use provision_core::domain::selection::SelectionContext;
use provision_core::domain::sequence::HostPair;

use crate::mprint;
use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

pub fn pair_to_details(pair: &HostPair, tag_prefix: &str) -> Vec<Detail> {
    let tagged: ColoredString = if dispatch::is_tag_eligible(&pair.hostname, tag_prefix) {
        "yes".color(colors::ACCENT)
    } else {
        "no".color(colors::SEPARATOR)
    };

    vec![
        ("IPv4".to_string(), pair.ip.to_string().color(colors::IPV4_ADDR)),
        ("Tagged".to_string(), tagged),
    ]
}

pub fn print_pairs(pairs: &[HostPair], tag_prefix: &str) {
    for (idx, pair) in pairs.iter().enumerate() {
        print::tree_head(idx, &pair.hostname);
        print::as_tree_one_level(pair_to_details(pair, tag_prefix));
        if idx + 1 != pairs.len() {
            mprint!();
        }
    }
}

pub fn print_selection(selection: &SelectionContext) {
    print::GLOBAL_KEY_WIDTH.set(11);
    print::aligned_line("Network", selection.network.as_str());
    print::aligned_line("Gateway", selection.gateway.to_string());
    print::aligned_line("Netmask", selection.netmask.to_string());
    print::aligned_line("CPUs", selection.cpus.to_string());
    print::aligned_line("Memory", format!("{} MB", selection.memory_mb));
    print::aligned_line("Template", selection.template.as_str());
    print::aligned_line(
        "Run list",
        format!("role[{}],role[{}]", selection.datacenter_role, selection.config_role)
            .color(colors::SECONDARY),
    );
    print::aligned_line("Environment", selection.environment.as_str());
    print::aligned_line("VMs", selection.count.to_string().bold());
}
