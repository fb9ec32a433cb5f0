use nodestat::core::{FilterOptions, NodeReport, StatePattern};

const FIXTURE: &str = include_str!("../fixtures/scontrol_nodes.txt");

fn hostnames(filter: &FilterOptions) -> Vec<String> {
    NodeReport::from_output(FIXTURE, filter)
        .unwrap()
        .nodes
        .into_iter()
        .map(|n| n.hostname)
        .collect()
}

#[test]
fn test_no_filters() {
    assert_eq!(hostnames(&FilterOptions::all()).len(), 5);
}

#[test]
fn test_cpu_only() {
    let filter = FilterOptions {
        cpu_only: true,
        ..Default::default()
    };
    assert_eq!(hostnames(&filter), vec!["node01", "node03"]);
}

#[test]
fn test_gpu_only() {
    let filter = FilterOptions {
        gpu_only: true,
        ..Default::default()
    };
    assert_eq!(hostnames(&filter), vec!["node01"]);
}

#[test]
fn test_idle_only_includes_down_nodes() {
    let filter = FilterOptions {
        idle_only: true,
        ..Default::default()
    };
    assert_eq!(hostnames(&filter), vec!["node02(d)", "node04", "node05"]);
}

#[test]
fn test_state_pattern() {
    let filter = FilterOptions {
        state: Some(StatePattern::new("idle").unwrap()),
        ..Default::default()
    };
    assert_eq!(hostnames(&filter), vec!["node04", "node05"]);

    let filter = FilterOptions {
        state: Some(StatePattern::new("^down$").unwrap()),
        ..Default::default()
    };
    assert_eq!(hostnames(&filter), vec!["node02(d)"]);
}

#[test]
fn test_gpu_and_idle_is_always_empty() {
    let filter = FilterOptions {
        gpu_only: true,
        idle_only: true,
        ..Default::default()
    };
    assert!(hostnames(&filter).is_empty());
}

#[test]
fn test_cpu_and_idle_is_always_empty() {
    let filter = FilterOptions {
        cpu_only: true,
        idle_only: true,
        ..Default::default()
    };
    assert!(hostnames(&filter).is_empty());
}
