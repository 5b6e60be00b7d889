//! Release index layer
//!
//! Fetches the released versions of each required package before the
//! analyzers run; the analysis itself never performs I/O.
//!
//! - [`pypi`]: PyPI JSON API client

pub mod pypi;

#[cfg(test)]
use mockall::automock;

use thiserror::Error;
use tracing::debug;

use crate::model::{PackageReleases, PackageRequirement, ReleaseIndex};

pub use pypi::PypiRegistry;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for fetching released package versions from an index
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches every version the index has ever released for a package
    ///
    /// # Returns
    /// * `Ok(PackageReleases)` - The package's full release set
    /// * `Err(RegistryError::NotFound)` - The index has no such package
    /// * `Err(RegistryError)` - The fetch failed
    async fn fetch_releases(&self, package_name: &str) -> Result<PackageReleases, RegistryError>;
}

/// Fetch release data for every named requirement.
///
/// An unknown package is an expected absence: it is left out of the index
/// and the tracked analyzer reports it at debug severity. Any other fetch
/// failure aborts the run.
pub async fn fetch_release_index(
    source: &dyn ReleaseSource,
    requirements: &[PackageRequirement],
) -> Result<ReleaseIndex, RegistryError> {
    let mut index = ReleaseIndex::default();

    for requirement in requirements {
        match source.fetch_releases(requirement.name()).await {
            Ok(releases) => index.insert(releases),
            Err(RegistryError::NotFound(name)) => {
                debug!("No releases found for '{}'", name);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(index)
}
