// Core business logic module

pub mod config;
pub mod export;
pub mod filter;
pub mod record;
pub mod report;
pub mod scontrol;

// Re-export commonly used items
pub use config::Config;
pub use filter::{FilterOptions, StatePattern};
pub use record::NodeRecord;
pub use report::{ClusterSummary, NodeReport};
pub use scontrol::{FileSource, NodeSource, Scontrol};
