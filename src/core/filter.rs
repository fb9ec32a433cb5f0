// Node filtering

use crate::core::record::NodeRecord;
use crate::error::Result;
use regex::{Regex, RegexBuilder};

/// Case-insensitive pattern matched anywhere in a node's state
#[derive(Debug, Clone)]
pub struct StatePattern {
    regex: Regex,
}

impl StatePattern {
    /// Compile a user supplied pattern. Plain words are valid patterns and
    /// match as substrings.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, state: &str) -> bool {
        self.regex.is_match(state)
    }
}

/// Active filters for a report run. Every enabled filter must accept a node
/// for it to be kept; with nothing enabled every node is kept.
///
/// `cpu_only` together with `idle_only` (or `gpu_only` with `idle_only`)
/// can never match anything. That combination is allowed and simply yields
/// an empty report.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub cpu_only: bool,
    pub gpu_only: bool,
    pub idle_only: bool,
    pub state: Option<StatePattern>,
}

impl FilterOptions {
    /// Filters that keep every node
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        !self.cpu_only && !self.gpu_only && !self.idle_only && self.state.is_none()
    }

    /// Decide whether a node is kept
    pub fn matches(&self, node: &NodeRecord) -> bool {
        if self.cpu_only && node.cpu_allocated == 0 {
            return false;
        }
        if self.gpu_only && node.gpu_allocated == 0 {
            return false;
        }
        if self.idle_only && (node.cpu_allocated > 0 || node.gpu_allocated > 0) {
            return false;
        }
        if let Some(pattern) = &self.state {
            if !pattern.is_match(&node.state) {
                return false;
            }
        }
        true
    }

    /// Keep the matching nodes, preserving their order
    pub fn apply(&self, nodes: Vec<NodeRecord>) -> Vec<NodeRecord> {
        nodes.into_iter().filter(|n| self.matches(n)).collect()
    }
}
