//! Sources of raw node status text.
//!
//! The report normally runs `scontrol show node --oneliner`, which prints one
//! line per node. Saved output can be read back from a file (or stdin) instead.

use crate::error::{NodestatError, Result};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::Command;

/// Default name of the Slurm status binary
pub const DEFAULT_SCONTROL: &str = "scontrol";

/// Anything that can produce node status text
pub trait NodeSource {
    /// Return the full status snapshot, one node per line
    fn fetch(&self) -> Result<String>;

    /// Human readable description used in log and error messages
    fn describe(&self) -> String;
}

/// Queries the scheduler through the `scontrol` binary
#[derive(Debug, Clone)]
pub struct Scontrol {
    program: String,
}

impl Scontrol {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Scontrol {
    fn default() -> Self {
        Self::new(DEFAULT_SCONTROL)
    }
}

impl NodeSource for Scontrol {
    fn fetch(&self) -> Result<String> {
        let program = which::which(&self.program).map_err(|e| {
            NodestatError::scheduler(format!("'{}' not found: {}", self.program, e))
        })?;

        log::info!("Running {:?} show node --oneliner", program);

        let output = Command::new(&program)
            .args(["show", "node", "--oneliner"])
            .output()
            .map_err(|e| {
                NodestatError::scheduler(format!("failed to execute {:?}: {}", program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NodestatError::scheduler(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        ensure_nonempty(stdout, &self.describe())
    }

    fn describe(&self) -> String {
        format!("{} show node --oneliner", self.program)
    }
}

/// Reads previously captured status output; `-` means stdin
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

impl NodeSource for FileSource {
    fn fetch(&self) -> Result<String> {
        let text = if self.is_stdin() {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            log::info!("Reading node status from {:?}", self.path);
            fs::read_to_string(&self.path).map_err(|e| {
                NodestatError::scheduler(format!("cannot read {:?}: {}", self.path, e))
            })?
        };

        ensure_nonempty(text, &self.describe())
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}

fn ensure_nonempty(text: String, source: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(NodestatError::scheduler(format!(
            "{} returned no node records",
            source
        )));
    }
    Ok(text)
}
