use crate::core::scontrol::DEFAULT_SCONTROL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured scontrol binary
pub const SCONTROL_ENV: &str = "NODESTAT_SCONTROL";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path or name of the scontrol binary
    #[serde(default)]
    pub scontrol_path: Option<String>,
    /// Directory that relative export paths are written to
    #[serde(default)]
    pub export_dir: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load a config file, falling back to defaults when it is missing,
    /// empty or unreadable as JSON
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid config file {:?}: {}", config_path, e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("nodestat").join("config.json"))
    }

    pub fn set_scontrol_path(&mut self, path: String) {
        self.scontrol_path = Some(path);
    }

    pub fn set_export_dir(&mut self, dir: String) {
        self.export_dir = Some(dir);
    }

    /// Pick the scontrol binary: command line flag, then `NODESTAT_SCONTROL`,
    /// then the config file, then plain `scontrol` from PATH
    pub fn resolve_scontrol(&self, flag: Option<&str>) -> String {
        if let Some(path) = flag {
            return path.to_string();
        }
        if let Ok(path) = env::var(SCONTROL_ENV) {
            if !path.trim().is_empty() {
                return path;
            }
        }
        self.scontrol_path
            .clone()
            .unwrap_or_else(|| DEFAULT_SCONTROL.to_string())
    }

    /// Place a relative export path under the configured export directory
    pub fn resolve_export_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.export_dir {
            Some(dir) if path.is_relative() => Path::new(dir).join(path),
            _ => path.to_path_buf(),
        }
    }
}
