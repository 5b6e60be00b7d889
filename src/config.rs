//! CLI definition

use std::path::PathBuf;

use clap::Parser;

use crate::analyzer::Action;
use crate::registry::pypi::DEFAULT_PYPI_URL;

#[derive(Debug, Parser)]
#[command(name = "deplint")]
#[command(version, about = "A dependency linter for Python requirements files")]
pub struct Cli {
    /// Analysis to run
    #[arg(value_enum)]
    pub action: Action,

    /// Path to the requirements manifest
    #[arg(short = 'r', long = "requirements", default_value = "requirements.txt")]
    pub requirements: PathBuf,

    /// Python interpreter whose environment is inspected
    #[arg(long, default_value = "python")]
    pub python: PathBuf,

    /// Base URL of the package index
    #[arg(long, default_value = DEFAULT_PYPI_URL)]
    pub index_url: String,

    /// Show debug-level advice and enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_applied_when_only_an_action_is_given() {
        let cli = Cli::try_parse_from(["deplint", "installed"]).unwrap();

        assert_eq!(cli.action, Action::Installed);
        assert_eq!(cli.requirements, PathBuf::from("requirements.txt"));
        assert_eq!(cli.python, PathBuf::from("python"));
        assert_eq!(cli.index_url, DEFAULT_PYPI_URL);
        assert!(!cli.verbose);
    }

    #[test]
    fn flags_override_the_defaults() {
        let cli = Cli::try_parse_from([
            "deplint",
            "tracked",
            "-r",
            "dev-requirements.txt",
            "--python",
            "/usr/bin/python3",
            "--index-url",
            "http://127.0.0.1:8080",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.action, Action::Tracked);
        assert_eq!(cli.requirements, PathBuf::from("dev-requirements.txt"));
        assert_eq!(cli.python, PathBuf::from("/usr/bin/python3"));
        assert_eq!(cli.index_url, "http://127.0.0.1:8080");
        assert!(cli.verbose);
    }

    #[test]
    fn a_missing_or_unknown_action_is_a_usage_error() {
        assert!(Cli::try_parse_from(["deplint"]).is_err());
        assert!(Cli::try_parse_from(["deplint", "install-everything"]).is_err());
    }
}
