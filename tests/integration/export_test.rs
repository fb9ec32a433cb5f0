use nodestat::core::export;
use nodestat::core::{FilterOptions, NodeReport};
use nodestat::ui::formatters;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = include_str!("../fixtures/scontrol_nodes.txt");

#[test]
fn test_exports_contain_only_filtered_records() {
    let filter = FilterOptions {
        cpu_only: true,
        ..Default::default()
    };
    let report = NodeReport::from_output(FIXTURE, &filter).unwrap();

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("nodes.csv");
    let json_path = dir.path().join("nodes.json");
    export::write_csv(&csv_path, &report.nodes).unwrap();
    export::write_json(&json_path, &report.nodes).unwrap();

    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "node01,32,16,50.0,8.5,4,2,125,62,MIXED,");
    assert_eq!(lines[2], "node03,64,64,100.0,63.97,0,0,500,400,ALLOCATED,");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Hostname"], "node01");
    assert_eq!(rows[0]["Ratio"], 50.0);
    assert_eq!(rows[0]["Load"], 8.5);
    assert_eq!(rows[1]["Hostname"], "node03");
    assert_eq!(rows[1]["Load"], 63.97);
    assert_eq!(rows[1]["AllocMemGB"], 400);
}

#[test]
fn test_console_and_exports_agree() {
    let report = NodeReport::from_output(FIXTURE, &FilterOptions::all()).unwrap();
    let table = formatters::format_table(&report.nodes, false);
    let rows = export::export_rows(&report.nodes);

    assert_eq!(table.len(), rows.len() + 1);
    for (line, row) in table[1..].iter().zip(&rows) {
        let cols: Vec<_> = line.split_whitespace().collect();
        assert_eq!(cols[0], row.hostname);
        assert_eq!(cols[3], format!("{:.1}", row.ratio));
        assert_eq!(cols[4], format!("{:.2}", row.load));
        assert_eq!(cols[9], row.state);
    }
}

#[test]
fn test_down_node_reason_is_exported() {
    let report = NodeReport::from_output(FIXTURE, &FilterOptions::all()).unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nodes.csv");
    export::write_csv(&path, &report.nodes).unwrap();

    let csv = fs::read_to_string(&path).unwrap();
    let down = csv.lines().find(|l| l.starts_with("node02(d),")).unwrap();
    assert_eq!(
        down,
        "node02(d),0,0,0.0,0.0,0,0,0,0,DOWN,Not responding [slurm@2024-03-01T10:00:00]"
    );
}
