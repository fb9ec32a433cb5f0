// UI and formatting module

pub mod formatters;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_header, format_row, format_summary, format_table};
pub use prompts::{colors_enabled, configure_colors, dimmed, info, success, warn};
