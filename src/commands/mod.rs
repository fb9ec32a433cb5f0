// Command handlers module
pub mod completions;
pub mod config;
pub mod nodes;
pub mod version;

// Re-exports for cleaner imports
pub use nodes::execute as nodes;
pub use version::execute as version;
