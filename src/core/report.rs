// Node report: the records kept by the filters plus cluster totals

use crate::core::filter::FilterOptions;
use crate::core::record::{self, NodeRecord};
use crate::core::scontrol::NodeSource;
use crate::error::Result;

/// Filtered node records for a single run
#[derive(Debug, Clone, Default)]
pub struct NodeReport {
    pub nodes: Vec<NodeRecord>,
}

/// Totals over the nodes of a report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterSummary {
    pub nodes: usize,
    pub down_nodes: usize,
    pub cpu_total: u64,
    pub cpu_allocated: u64,
    pub gpu_configured: u64,
    pub gpu_allocated: u64,
    pub memory_total_gb: u64,
    pub memory_allocated_gb: u64,
}

impl ClusterSummary {
    /// Allocated over total cores across the cluster, 0.0 without cores
    pub fn cpu_ratio(&self) -> f64 {
        if self.cpu_total == 0 {
            0.0
        } else {
            self.cpu_allocated as f64 / self.cpu_total as f64 * 100.0
        }
    }
}

impl NodeReport {
    /// Decode raw status text and keep the nodes accepted by `filter`
    pub fn from_output(output: &str, filter: &FilterOptions) -> Result<Self> {
        let nodes = record::parse_nodes(output)?;
        let total = nodes.len();
        let nodes = filter.apply(nodes);

        log::debug!("Kept {} of {} nodes", nodes.len(), total);

        Ok(Self { nodes })
    }

    /// Fetch a snapshot from `source` and build the report from it
    pub fn collect(source: &dyn NodeSource, filter: &FilterOptions) -> Result<Self> {
        let output = source.fetch()?;
        Self::from_output(&output, filter)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn summary(&self) -> ClusterSummary {
        self.nodes.iter().fold(ClusterSummary::default(), |mut acc, node| {
            acc.nodes += 1;
            if node.is_marked_down() {
                acc.down_nodes += 1;
            }
            acc.cpu_total += u64::from(node.cpu_total);
            acc.cpu_allocated += u64::from(node.cpu_allocated);
            acc.gpu_configured += u64::from(node.gpu_configured);
            acc.gpu_allocated += u64::from(node.gpu_allocated);
            acc.memory_total_gb += node.memory_total_gb;
            acc.memory_allocated_gb += node.memory_allocated_gb;
            acc
        })
    }
}
