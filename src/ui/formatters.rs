use crate::core::export::round_to;
use crate::core::record::NodeRecord;
use crate::core::report::ClusterSummary;
use chrono::{DateTime, Local};
use colored::*;
use unicode_width::UnicodeWidthStr;

const HOSTNAME_WIDTH: usize = 20;
const STATE_WIDTH: usize = 12;

/// Header row of the node table
pub fn format_header() -> String {
    format!(
        "{} {:>6} {:>6} {:>9} {:>8} {:>5} {:>6} {:>8} {:>9} {} {}",
        pad_right("Hostname", HOSTNAME_WIDTH),
        "Cores",
        "InUse",
        "Ratio(%)",
        "Load",
        "GPUs",
        "InUse",
        "Mem(GB)",
        "Alloc(GB)",
        pad_right("State", STATE_WIDTH),
        "Reason"
    )
}

/// One table row. Padding is computed before coloring so columns stay aligned.
pub fn format_row(node: &NodeRecord, color: bool) -> String {
    let state = pad_right(&node.state, STATE_WIDTH);
    let state = if color {
        colorize_state(&node.state, &state)
    } else {
        state
    };

    format!(
        "{} {:>6} {:>6} {:>9.1} {:>8.2} {:>5} {:>6} {:>8} {:>9} {} {}",
        pad_right(&node.hostname, HOSTNAME_WIDTH),
        node.cpu_total,
        node.cpu_allocated,
        round_to(node.utilization, 1),
        round_to(node.cpu_load, 2),
        node.gpu_configured,
        node.gpu_allocated,
        node.memory_total_gb,
        node.memory_allocated_gb,
        state,
        node.reason
    )
    .trim_end()
    .to_string()
}

/// Header plus one row per node
pub fn format_table(nodes: &[NodeRecord], color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(nodes.len() + 1);
    let header = format_header();
    lines.push(if color {
        header.bold().to_string()
    } else {
        header
    });
    lines.extend(nodes.iter().map(|n| format_row(n, color)));
    lines
}

/// Cluster totals printed after the table
pub fn format_summary(summary: &ClusterSummary, taken_at: DateTime<Local>) -> Vec<String> {
    vec![
        format!("Cluster summary ({})", taken_at.format("%Y-%m-%d %H:%M")),
        format!("  Nodes: {} ({} down)", summary.nodes, summary.down_nodes),
        format!(
            "  Cores: {} / {} in use ({:.1}%)",
            summary.cpu_allocated,
            summary.cpu_total,
            round_to(summary.cpu_ratio(), 1)
        ),
        format!(
            "  GPUs: {} / {} in use",
            summary.gpu_allocated, summary.gpu_configured
        ),
        format!(
            "  Memory: {} / {} GB allocated",
            summary.memory_allocated_gb, summary.memory_total_gb
        ),
    ]
}

/// Pad text on the right to a display width; longer text is left untouched
pub fn pad_right(text: &str, width: usize) -> String {
    let len = UnicodeWidthStr::width(text);
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

fn colorize_state(state: &str, padded: &str) -> String {
    let upper = state.to_uppercase();
    if upper.starts_with("DOWN") || upper.contains("DRAIN") || upper.contains("FAIL") {
        padded.red().to_string()
    } else if upper.starts_with("MIXED") || upper.starts_with("ALLOC") {
        padded.yellow().to_string()
    } else if upper.starts_with("IDLE") {
        padded.green().to_string()
    } else {
        padded.to_string()
    }
}
