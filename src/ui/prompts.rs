// Colored status messages

use colored::Colorize;
use std::io::{self, IsTerminal};

/// Display a warning message
pub fn warn(message: &str) {
    eprintln!("{}", format!("Warning: {}", message).yellow().bold());
}

/// Display an info message
pub fn info(message: &str) {
    println!("{}", message.cyan());
}

/// Display a success message
pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

/// Display a dimmed/secondary message
pub fn dimmed(message: &str) {
    println!("{}", message.dimmed());
}

/// Enable or disable colored output for the whole process.
///
/// Colors are turned off when `disabled` is set, when `NO_COLOR` is present
/// in the environment or when stdout is not a terminal.
pub fn configure_colors(disabled: bool) {
    if disabled || std::env::var_os("NO_COLOR").is_some() || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Whether colored output is currently enabled
pub fn colors_enabled() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}
