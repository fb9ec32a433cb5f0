use crate::core::config::SCONTROL_ENV;
use crate::core::Config;
use crate::ui;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Configuration keys that can be set from the command line
enum ConfigKey {
    Scontrol,
    ExportDir,
}

impl ConfigKey {
    fn name(&self) -> &'static str {
        match self {
            ConfigKey::Scontrol => "scontrol",
            ConfigKey::ExportDir => "export-dir",
        }
    }

    fn set(&self, config: &mut Config, value: String) {
        match self {
            ConfigKey::Scontrol => config.set_scontrol_path(value),
            ConfigKey::ExportDir => config.set_export_dir(value),
        }
    }
}

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("set", sub_matches)) => handle_set(sub_matches),
        Some(("get", _)) => handle_get(),
        Some(("reset", _)) => handle_reset(),
        _ => {
            ui::info("Use 'nodestat config --help' for more information.");
            Ok(())
        }
    }
}

fn handle_set(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("scontrol", sub_matches)) => set_value(sub_matches, ConfigKey::Scontrol),
        Some(("export-dir", sub_matches)) => set_value(sub_matches, ConfigKey::ExportDir),
        _ => {
            ui::info("Use 'nodestat config set --help' for more information.");
            Ok(())
        }
    }
}

fn set_value(matches: &clap::ArgMatches, key: ConfigKey) -> Result<()> {
    let value = matches
        .get_one::<String>("path")
        .context("Path argument is required")?;

    let value = match key {
        ConfigKey::ExportDir => {
            let path = Path::new(value);
            if !path.is_dir() {
                ui::warn(&format!("Directory '{}' does not exist", value));
                value.to_string()
            } else {
                path.canonicalize()
                    .with_context(|| format!("Failed to resolve path: {}", value))?
                    .to_string_lossy()
                    .to_string()
            }
        }
        ConfigKey::Scontrol => {
            if which::which(value).is_err() {
                ui::warn(&format!("'{}' is not an executable on this host", value));
            }
            value.to_string()
        }
    };

    let mut config = Config::load()?;
    key.set(&mut config, value.clone());
    config.save()?;

    ui::success(&format!("✓ {} set to: {}", key.name(), value));
    Ok(())
}

fn handle_get() -> Result<()> {
    let config = Config::load()?;
    let path = Config::get_config_path()?;

    println!("{} {}", "Config file:".white().bold(), path.display().to_string().dimmed());
    println!(
        "  {:<12} {}",
        "scontrol",
        config
            .scontrol_path
            .as_deref()
            .unwrap_or("(not set, using PATH)")
            .cyan()
    );
    println!(
        "  {:<12} {}",
        "export-dir",
        config
            .export_dir
            .as_deref()
            .unwrap_or("(not set, using current directory)")
            .cyan()
    );

    if let Ok(value) = std::env::var(SCONTROL_ENV) {
        ui::dimmed(&format!("{} is set and overrides scontrol: {}", SCONTROL_ENV, value));
    }

    Ok(())
}

fn handle_reset() -> Result<()> {
    Config::default().save()?;
    ui::success("✓ Configuration reset to defaults");
    Ok(())
}
