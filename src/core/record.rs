//! Decoder for `scontrol show node --oneliner` output.
//!
//! Each line of the status output describes one node as whitespace separated
//! `Key=Value` tokens. Some values (`CfgTRES`, `AllocTRES`) carry their own
//! comma separated `subkey=subvalue` lists, and `Reason` is free text that may
//! contain spaces, so it is captured from the raw line instead of the token map.
//!
//! # Examples
//!
//! ```
//! use nodestat::core::record::NodeRecord;
//!
//! let line = "NodeName=node01 Arch=x86_64 CPUTot=32 CPUAlloc=16 State=MIXED";
//! let node = NodeRecord::from_line(line)?;
//! assert_eq!(node.utilization, 50.0);
//! # Ok::<(), nodestat::NodestatError>(())
//! ```

use crate::error::{NodestatError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::str::FromStr;

/// Suffix appended to the hostname of nodes that report no architecture
pub const DOWN_MARKER: &str = "(d)";

/// State forced onto nodes that report no architecture
pub const DOWN_STATE: &str = "DOWN";

/// Field whose absence marks a node as unreachable
const ARCH_FIELD: &str = "Arch";

/// TRES sub-key holding the GPU count
const GPU_TRES_KEY: &str = "gres/gpu";

static REASON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|\s)Reason=(.*)$").unwrap());
static STATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|\s)State=(\S*)").unwrap());
static REAL_MEMORY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)RealMemory=(\S+)").unwrap());
static ALLOC_MEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|\s)AllocMem=(\S+)").unwrap());

/// One cluster node as reported by the scheduler
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub hostname: String,
    pub cpu_total: u32,
    pub cpu_allocated: u32,
    pub cpu_load: f64,
    /// Allocated cores as a percentage of total cores (0.0 when no cores)
    pub utilization: f64,
    pub memory_total_gb: u64,
    pub memory_allocated_gb: u64,
    pub gpu_configured: u32,
    pub gpu_allocated: u32,
    pub state: String,
    pub reason: String,
}

impl NodeRecord {
    /// Decode a single status line into a node record.
    ///
    /// Missing fields fall back to zero or empty values. A line without an
    /// `Arch` field is treated as a down node: every numeric field is zeroed,
    /// the state is forced to `DOWN` and the hostname gets the `(d)` suffix.
    /// A numeric field that is present but not a valid number is an error.
    pub fn from_line(line: &str) -> Result<Self> {
        let fields = parse_fields(line);

        let hostname = fields.get("NodeName").cloned().unwrap_or_default();
        let reason = capture(&REASON_RE, line)
            .map(|r| r.trim_end().to_string())
            .unwrap_or_default();

        if !fields.contains_key(ARCH_FIELD) {
            log::debug!("Node '{}' has no {} field, marking down", hostname, ARCH_FIELD);
            return Ok(Self::down(hostname, reason));
        }

        let state = capture(&STATE_RE, line).unwrap_or_default().to_string();
        let real_memory: u64 = capture(&REAL_MEMORY_RE, line)
            .map(|v| parse_number("RealMemory", v))
            .transpose()?
            .unwrap_or(0);
        let alloc_mem: u64 = capture(&ALLOC_MEM_RE, line)
            .map(|v| parse_number("AllocMem", v))
            .transpose()?
            .unwrap_or(0);

        let cpu_total: u32 = field_or_default(&fields, "CPUTot")?;
        let cpu_allocated: u32 = field_or_default(&fields, "CPUAlloc")?;
        let cpu_load: f64 = field_or_default(&fields, "CPULoad")?;
        if !(cpu_load.is_finite() && cpu_load >= 0.0) {
            return Err(NodestatError::invalid_number("CPULoad", fields["CPULoad"].clone()));
        }

        let gpu_configured = gpu_count(fields.get("CfgTRES"), "CfgTRES")?;
        let gpu_allocated = gpu_count(fields.get("AllocTRES"), "AllocTRES")?;

        Ok(Self {
            hostname,
            cpu_total,
            cpu_allocated,
            cpu_load,
            utilization: utilization(cpu_allocated, cpu_total),
            memory_total_gb: real_memory / 1024,
            memory_allocated_gb: alloc_mem / 1024,
            gpu_configured,
            gpu_allocated,
            state,
            reason,
        })
    }

    /// Record for a node the scheduler cannot describe
    fn down(hostname: String, reason: String) -> Self {
        Self {
            hostname: format!("{}{}", hostname, DOWN_MARKER),
            cpu_total: 0,
            cpu_allocated: 0,
            cpu_load: 0.0,
            utilization: 0.0,
            memory_total_gb: 0,
            memory_allocated_gb: 0,
            gpu_configured: 0,
            gpu_allocated: 0,
            state: DOWN_STATE.to_string(),
            reason,
        }
    }

    /// True when the record was normalized from an incomplete line
    pub fn is_marked_down(&self) -> bool {
        self.hostname.ends_with(DOWN_MARKER) && self.state == DOWN_STATE
    }
}

/// Decode every non-blank line of the status output, keeping input order.
pub fn parse_nodes(output: &str) -> Result<Vec<NodeRecord>> {
    output
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(NodeRecord::from_line)
        .collect()
}

/// Split a line into a `Key -> Value` map.
///
/// Tokens are split on the first `=`; tokens without one are dropped. When a
/// key repeats, the last occurrence wins.
pub fn parse_fields(line: &str) -> HashMap<String, String> {
    line.split_whitespace()
        .filter_map(|token| token.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Split a TRES value such as `cpu=4,mem=8000,gres/gpu=2` into its sub-fields.
/// Entries without `=` are ignored.
pub fn parse_tres(value: &str) -> HashMap<String, String> {
    value
        .split(',')
        .filter_map(|entry| entry.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Allocated over total cores as a percentage, 0.0 for nodes without cores
pub fn utilization(allocated: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        allocated as f64 / total as f64 * 100.0
    }
}

fn gpu_count(tres: Option<&String>, field: &'static str) -> Result<u32> {
    let Some(tres) = tres else {
        return Ok(0);
    };

    match parse_tres(tres).get(GPU_TRES_KEY) {
        Some(count) => parse_number(field, count),
        None => Ok(0),
    }
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn field_or_default<T>(fields: &HashMap<String, String>, key: &'static str) -> Result<T>
where
    T: FromStr + Default,
{
    match fields.get(key) {
        Some(value) if !value.is_empty() => parse_number(key, value),
        _ => Ok(T::default()),
    }
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| NodestatError::invalid_number(field, value))
}
