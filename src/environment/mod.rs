//! Installed-environment provider backed by pip
//!
//! Queries a Python interpreter's environment with
//! `python -m pip list --format=json` and normalizes the output into
//! [`InstalledPackages`] before any analysis runs.

use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{InstalledPackage, InstalledPackages, ModelError};

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("Failed to run '{}': {source}", python.display())]
    Io {
        python: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pip exited with {status}: {stderr}")]
    Pip { status: ExitStatus, stderr: String },

    #[error("Invalid pip output: {0}")]
    InvalidOutput(String),
}

/// One entry of `pip list --format=json`
#[derive(Debug, Deserialize)]
struct PipListEntry {
    name: String,
    version: String,
}

/// The environment of one Python interpreter
pub struct PipEnvironment {
    python: PathBuf,
}

impl PipEnvironment {
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// List the packages installed in the interpreter's environment
    pub fn installed_packages(&self) -> Result<InstalledPackages, EnvironmentError> {
        debug!("Listing installed packages via {}", self.python.display());

        let output = Command::new(&self.python)
            .args(["-m", "pip", "list", "--format=json", "--disable-pip-version-check"])
            .output()
            .map_err(|source| EnvironmentError::Io {
                python: self.python.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(EnvironmentError::Pip {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        parse_pip_list(&String::from_utf8_lossy(&output.stdout))
    }
}

fn parse_pip_list(json: &str) -> Result<InstalledPackages, EnvironmentError> {
    let entries: Vec<PipListEntry> =
        serde_json::from_str(json).map_err(|e| EnvironmentError::InvalidOutput(e.to_string()))?;

    let packages = entries
        .into_iter()
        .map(|entry| InstalledPackage::new(entry.name, entry.version))
        .collect::<Result<Vec<_>, ModelError>>()
        .map_err(|e| EnvironmentError::InvalidOutput(e.to_string()))?;

    Ok(InstalledPackages::new(packages))
}
