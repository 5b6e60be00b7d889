//! Analysis layer
//!
//! Each analyzer covers one concern and implements [`Analyzer`]: consume the
//! normalized models, emit an [`AdviceList`]. The orchestrator maps a CLI
//! action to an ordered list of analyzers, runs them sequentially over
//! immutable input snapshots, and concatenates their output in declaration
//! order. Analyzer errors propagate and abort the run; a partial report
//! could hide real problems.
//!
//! - [`required_installed`]: requirements satisfied by an installed package
//! - [`required_missing`]: requirements with no installed counterpart
//! - [`required_tracked`]: requirements with a newer release upstream
//! - [`unpinned`]: requirements without a version constraint

pub mod required_installed;
pub mod required_missing;
pub mod required_tracked;
pub mod unpinned;

use thiserror::Error;
use tracing::debug;

use crate::model::{AdviceList, InstalledPackages, ModelError, PackageRequirement, ReleaseIndex};
use crate::version::error::VersionError;

pub use required_installed::RequiredInstalledAnalyzer;
pub use required_missing::RequiredMissingAnalyzer;
pub use required_tracked::RequiredTrackedAnalyzer;
pub use unpinned::UnpinnedAnalyzer;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// One analysis concern
pub trait Analyzer {
    /// Stable name recorded on every advice this analyzer emits
    fn name(&self) -> &'static str;

    /// Run the analysis over the inputs captured at construction
    fn analyze(&self) -> Result<AdviceList, AnalyzeError>;
}

/// What the CLI asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    /// Report requirements satisfied by the installed environment
    Installed,
    /// Report requirements missing from the installed environment
    Missing,
    /// Report requirements without a version constraint
    Unpinned,
    /// Report requirements with a newer release on the index
    Tracked,
    /// Report the installed state together with available upgrades
    Upgrade,
}

impl Action {
    pub fn needs_environment(&self) -> bool {
        matches!(self, Action::Installed | Action::Missing | Action::Upgrade)
    }

    pub fn needs_release_index(&self) -> bool {
        matches!(self, Action::Tracked | Action::Upgrade)
    }
}

/// Run the analyzers selected by `action` and merge their advice.
///
/// Analyzers run to completion one after another; the merged list keeps the
/// first analyzer's findings ahead of the second's.
pub fn analyze(
    action: Action,
    requirements: &[PackageRequirement],
    installed: &InstalledPackages,
    releases: &ReleaseIndex,
) -> Result<AdviceList, AnalyzeError> {
    let analyzers = analyzers_for(action, requirements, installed, releases);

    let mut combined = AdviceList::default();
    for analyzer in &analyzers {
        let advice_list = analyzer.analyze()?;
        debug!(
            "Analyzer '{}' produced {} advice(s)",
            analyzer.name(),
            advice_list.len()
        );
        combined.extend(advice_list);
    }
    Ok(combined)
}

fn analyzers_for<'a>(
    action: Action,
    requirements: &'a [PackageRequirement],
    installed: &'a InstalledPackages,
    releases: &'a ReleaseIndex,
) -> Vec<Box<dyn Analyzer + 'a>> {
    match action {
        Action::Installed => vec![Box::new(RequiredInstalledAnalyzer::new(
            requirements,
            installed,
        ))],
        Action::Missing => vec![Box::new(RequiredMissingAnalyzer::new(
            requirements,
            installed,
        ))],
        Action::Unpinned => vec![Box::new(UnpinnedAnalyzer::new(requirements))],
        Action::Tracked => vec![Box::new(RequiredTrackedAnalyzer::new(
            requirements,
            releases,
        ))],
        Action::Upgrade => vec![
            Box::new(RequiredInstalledAnalyzer::new(requirements, installed)),
            Box::new(RequiredTrackedAnalyzer::new(requirements, releases)),
        ],
    }
}
