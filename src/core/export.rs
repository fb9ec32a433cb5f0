//! CSV and JSON exports of a node report.
//!
//! Both exports carry the same fields as the console table, with the ratio
//! rounded to one decimal and the load to two.

use crate::core::record::NodeRecord;
use crate::error::{NodestatError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column names shared by the CSV header and the JSON keys
pub const EXPORT_FIELDS: [&str; 11] = [
    "Hostname",
    "Cores",
    "InUse",
    "Ratio",
    "Load",
    "GPUs",
    "GPUInUse",
    "MemGB",
    "AllocMemGB",
    "State",
    "Reason",
];

/// One exported node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "Cores")]
    pub cores: u32,
    #[serde(rename = "InUse")]
    pub in_use: u32,
    #[serde(rename = "Ratio")]
    pub ratio: f64,
    #[serde(rename = "Load")]
    pub load: f64,
    #[serde(rename = "GPUs")]
    pub gpus: u32,
    #[serde(rename = "GPUInUse")]
    pub gpu_in_use: u32,
    #[serde(rename = "MemGB")]
    pub mem_gb: u64,
    #[serde(rename = "AllocMemGB")]
    pub alloc_mem_gb: u64,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Reason")]
    pub reason: String,
}

impl From<&NodeRecord> for ExportRow {
    fn from(node: &NodeRecord) -> Self {
        Self {
            hostname: node.hostname.clone(),
            cores: node.cpu_total,
            in_use: node.cpu_allocated,
            ratio: round_to(node.utilization, 1),
            load: round_to(node.cpu_load, 2),
            gpus: node.gpu_configured,
            gpu_in_use: node.gpu_allocated,
            mem_gb: node.memory_total_gb,
            alloc_mem_gb: node.memory_allocated_gb,
            state: node.state.clone(),
            reason: node.reason.clone(),
        }
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn export_rows(nodes: &[NodeRecord]) -> Vec<ExportRow> {
    nodes.iter().map(ExportRow::from).collect()
}

/// Render rows as a pretty printed JSON array
pub fn to_json(rows: &[ExportRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

pub fn write_csv(path: &Path, nodes: &[NodeRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| NodestatError::csv(path, e))?;
    write_csv_rows(&mut wtr, &export_rows(nodes))
        .map_err(|e| NodestatError::csv(path, e))?;
    log::info!("Wrote {} node(s) to {:?}", nodes.len(), path);
    Ok(())
}

pub fn write_json(path: &Path, nodes: &[NodeRecord]) -> Result<()> {
    let mut json = to_json(&export_rows(nodes))?;
    json.push('\n');
    write_file(path, json.as_bytes())?;
    log::info!("Wrote {} node(s) to {:?}", nodes.len(), path);
    Ok(())
}

// The header is written by hand so an empty report still gets one
fn write_csv_rows<W: Write>(wtr: &mut csv::Writer<W>, rows: &[ExportRow]) -> csv::Result<()> {
    wtr.write_record(EXPORT_FIELDS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(|e| NodestatError::export(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(data)
        .and_then(|_| writer.flush())
        .map_err(|e| NodestatError::export(path, e))
}
