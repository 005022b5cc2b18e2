use std::net::Ipv4Addr;

use provision_common::config::FleetSettings;
use provision_core::application::provision::ProvisionService;
use provision_core::domain::sequence::HostPair;
use provision_core::domain::tier::EnvironmentTier;

use crate::fakes::{CallLog, FakeFleet, MenuLog, ScriptedPrompter, StaticResolver};

/// Answers in wizard order, with the hostname and environment swapped in.
fn script<'a>(hostname: &'a str, environment: &'a str, count: &'a str) -> Vec<&'a str> {
    vec![
        hostname,
        "",                  // netmask: default
        "",                  // gateway: default
        "VLAN-120 Frontend", // network
        "4",                 // CPUs
        "8192",              // memory
        "centos6-Base",      // template
        "lvdefault",         // datacenter role
        "webapp",            // config role
        environment,
        count,
        "t3mplate-pw",
    ]
}

fn service(
    fleet: FakeFleet,
    answers: &[&str],
    hostname: &str,
    ip: Ipv4Addr,
) -> (ProvisionService, CallLog, MenuLog) {
    let log = fleet.log.clone();
    let prompter = ScriptedPrompter::new(answers);
    let menus = prompter.menus.clone();
    let service = ProvisionService::new(
        Box::new(fleet),
        Box::new(prompter),
        Box::new(StaticResolver::single(hostname, ip)),
        FleetSettings::default(),
    );
    (service, log, menus)
}

#[test]
fn three_lv_hosts_are_created_and_tagged() {
    let seed_ip = Ipv4Addr::new(10, 1, 2, 5);
    let (service, log, _menus) = service(
        FakeFleet::new(),
        &script("lv-app01", "webapp_prod", "3"),
        "lv-app01",
        seed_ip,
    );

    let (plan, report) = service.run().unwrap();

    assert_eq!(
        plan.pairs,
        vec![
            HostPair::new("lv-app01", Ipv4Addr::new(10, 1, 2, 5)),
            HostPair::new("lv-app02", Ipv4Addr::new(10, 1, 2, 6)),
            HostPair::new("lv-app03", Ipv4Addr::new(10, 1, 2, 7)),
        ]
    );

    let created = log.created();
    assert_eq!(created.len(), 3);
    assert_eq!(log.tagged(), vec!["lv-app01", "lv-app02", "lv-app03"]);
    assert_eq!(report.created, 3);
    assert_eq!(report.tagged, 3);
    assert_eq!(report.failed, 0);

    for (spec, pair) in created.iter().zip(&plan.pairs) {
        assert_eq!(spec.name, pair.hostname);
        assert_eq!(spec.ip, pair.ip);
        assert_eq!(spec.gateway, Ipv4Addr::new(10, 90, 0, 1));
        assert_eq!(spec.netmask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(spec.cpus, 4);
        assert_eq!(spec.memory_mb, 8192);
        assert_eq!(spec.template, "centos6-Base");
        assert_eq!(spec.network, "VLAN-120 Frontend");
        assert_eq!(spec.environment, "webapp_prod");
        assert_eq!(spec.run_list(), "role[lvdefault],role[webapp]");
        assert_eq!(spec.password.expose(), "t3mplate-pw");
    }
}

#[test]
fn creation_and_tagging_alternate_per_host() {
    let (service, log, _menus) = service(
        FakeFleet::new(),
        &script("lv-app01", "webapp_prod", "2"),
        "lv-app01",
        Ipv4Addr::new(10, 1, 2, 5),
    );

    service.run().unwrap();

    let order: Vec<String> = log
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            crate::fakes::Call::CreateVm(spec) => Some(format!("create {}", spec.name)),
            crate::fakes::Call::TagHost(name) => Some(format!("tag {name}")),
            _ => None,
        })
        .collect();
    assert_eq!(
        order,
        vec!["create lv-app01", "tag lv-app01", "create lv-app02", "tag lv-app02"]
    );
}

#[test]
fn dev_host_is_offered_dev_environments_only() {
    let (service, log, menus) = service(
        FakeFleet::new(),
        &script("lvdev42", "webapp_dev", "1"),
        "lvdev42",
        Ipv4Addr::new(10, 20, 0, 42),
    );

    let (plan, _report) = service.run().unwrap();

    assert_eq!(plan.request.tier, EnvironmentTier::Dev);
    assert_eq!(
        log.environment_queries(),
        vec![(String::from("webapp"), String::from("dev"))]
    );
    assert_eq!(
        menus.options_for("chef environment"),
        Some(vec![String::from("webapp_dev")])
    );
}

#[test]
fn sandbox_host_is_offered_sbx_environments() {
    let (service, log, _menus) = service(
        FakeFleet::new(),
        &script("lonsb07", "webapp_sbx", "2"),
        "lonsb07",
        Ipv4Addr::new(10, 30, 0, 7),
    );

    let (plan, _report) = service.run().unwrap();

    assert_eq!(plan.request.tier, EnvironmentTier::Sandbox);
    assert_eq!(log.environment_queries()[0].1, "sbx");
    assert_eq!(plan.pairs[1].hostname, "lonsb08");
    assert!(log.tagged().is_empty(), "lon hosts are not tagged");
}

#[test]
fn prod_host_outside_tag_prefix_is_not_tagged() {
    let (service, log, _menus) = service(
        FakeFleet::new(),
        &script("dubweb01", "webapp_prod", "2"),
        "dubweb01",
        Ipv4Addr::new(10, 40, 0, 1),
    );

    let (plan, report) = service.run().unwrap();

    assert_eq!(plan.request.tier, EnvironmentTier::Prod);
    assert_eq!(log.created().len(), 2);
    assert!(log.tagged().is_empty());
    assert_eq!(report.tagged, 0);
}

#[test]
fn failed_creation_does_not_stop_later_hosts() {
    let mut fleet = FakeFleet::new();
    fleet.failing_creates = vec![String::from("lv-app02")];
    let (service, log, _menus) = service(
        fleet,
        &script("lv-app01", "webapp_prod", "3"),
        "lv-app01",
        Ipv4Addr::new(10, 1, 2, 5),
    );

    let (_plan, report) = service.run().unwrap();

    assert_eq!(log.created().len(), 3);
    assert_eq!(report.created, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(log.tagged().len(), 3);
}

#[test]
fn addresses_carry_across_octets() {
    let (service, _log, _menus) = service(
        FakeFleet::new(),
        &script("lvweb254", "webapp_prod", "3"),
        "lvweb254",
        Ipv4Addr::new(10, 1, 2, 254),
    );

    let plan = service.prepare().unwrap();

    let ips: Vec<Ipv4Addr> = plan.pairs.iter().map(|p| p.ip).collect();
    assert_eq!(
        ips,
        vec![
            Ipv4Addr::new(10, 1, 2, 254),
            Ipv4Addr::new(10, 1, 2, 255),
            Ipv4Addr::new(10, 1, 3, 0),
        ]
    );
    assert_eq!(plan.pairs[2].hostname, "lvweb256");
}

#[test]
fn vlan_menu_is_sorted_network_labels() {
    let (service, _log, menus) = service(
        FakeFleet::new(),
        &script("lv-app01", "webapp_prod", "1"),
        "lv-app01",
        Ipv4Addr::new(10, 1, 2, 5),
    );

    service.prepare().unwrap();

    assert_eq!(
        menus.options_for("VLAN"),
        Some(vec![
            String::from("VLAN-031 Backend"),
            String::from("VLAN-120 Frontend"),
        ])
    );
    assert_eq!(
        menus.options_for("CPUs"),
        Some(vec!["2", "4", "6", "8"].into_iter().map(String::from).collect())
    );
}
