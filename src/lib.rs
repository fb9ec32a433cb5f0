// nodestat library - public API

// Re-export error types
pub mod error;
pub use error::{NodestatError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{FilterOptions, NodeRecord, NodeReport};

/// Initialize logging. `RUST_LOG` takes precedence over the verbosity level.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
