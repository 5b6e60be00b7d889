//! Released versions of a package, like: six-1.0, six-1.1

use std::collections::{BTreeSet, HashMap};

use crate::model::error::ModelError;
use crate::model::package_requirement::PackageRequirement;
use crate::version::error::VersionError;
use crate::version::semver::find_newer_than;

/// All versions a package has ever published to an index
///
/// Equality is value-based: same name and same version set, regardless of
/// construction order or origin. The set may legitimately be empty when the
/// index was queried for an unpublished name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReleases {
    name: String,
    versions: BTreeSet<String>,
}

impl PackageReleases {
    pub fn new(
        name: impl Into<String>,
        versions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(Self {
            name,
            versions: versions.into_iter().map(Into::into).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Human-readable `name-version` form, valid only for a single-version set
    ///
    /// Callers must establish the single-version context (e.g. the result of
    /// [`PackageReleases::newer_than`]) before asking; anything else is a
    /// contract violation, not a value to guess around.
    pub fn display_name_single(&self) -> Result<String, ModelError> {
        let mut versions = self.versions.iter();
        match (versions.next(), versions.next()) {
            (Some(version), None) => Ok(format!("{}-{}", self.name, version)),
            _ => Err(ModelError::NotSingleVersion {
                name: self.name.clone(),
                count: self.versions.len(),
            }),
        }
    }

    /// The single highest release strictly greater than the requirement's
    /// version, in base form, or `None` when nothing newer exists
    ///
    /// `None` means "checked, nothing newer" — distinct from an empty
    /// version set. The requirement must be pinned; comparing against an
    /// unpinned requirement is an error.
    pub fn newer_than(
        &self,
        requirement: &PackageRequirement,
    ) -> Result<Option<PackageReleases>, VersionError> {
        let Some(required) = requirement.version() else {
            return Err(VersionError::MissingVersion(requirement.name().to_string()));
        };

        let newest = find_newer_than(required, self.versions.iter().map(String::as_str))?;
        Ok(newest.map(|version| Self {
            name: self.name.clone(),
            versions: BTreeSet::from([version]),
        }))
    }
}

/// Lookup of release sets by package name
///
/// A name absent from the index means "no release data available", which
/// analyzers report as a low-severity finding rather than a failure.
#[derive(Debug, Clone, Default)]
pub struct ReleaseIndex {
    by_name: HashMap<String, PackageReleases>,
}

impl ReleaseIndex {
    pub fn insert(&mut self, releases: PackageReleases) {
        self.by_name.insert(releases.name.to_lowercase(), releases);
    }

    pub fn get_by_name(&self, name: &str) -> Option<&PackageReleases> {
        self.by_name.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn releases(name: &str, versions: &[&str]) -> PackageReleases {
        PackageReleases::new(name, versions.iter().copied()).unwrap()
    }

    fn pinned(name: &str, version: &str) -> PackageRequirement {
        PackageRequirement::new(name, Some(version.to_string())).unwrap()
    }

    #[test]
    fn equality_ignores_construction_order() {
        assert_eq!(
            releases("six", &["1.0", "1.1"]),
            releases("six", &["1.1", "1.0"])
        );
        assert_ne!(releases("six", &["1.0"]), releases("six", &["1.1"]));
        assert_ne!(releases("six", &["1.0"]), releases("flask", &["1.0"]));
    }

    #[test]
    fn display_name_single_requires_exactly_one_version() {
        assert_eq!(
            releases("six", &["1.10"]).display_name_single().unwrap(),
            "six-1.10"
        );

        assert_eq!(
            releases("six", &[]).display_name_single().unwrap_err(),
            ModelError::NotSingleVersion {
                name: "six".to_string(),
                count: 0,
            }
        );
        assert_eq!(
            releases("six", &["1.0", "1.1"])
                .display_name_single()
                .unwrap_err(),
            ModelError::NotSingleVersion {
                name: "six".to_string(),
                count: 2,
            }
        );
    }

    #[test]
    fn newer_than_selects_the_single_highest_release() {
        let available = releases("six", &["1.0", "1.1", "2.0"]);

        let newer = available.newer_than(&pinned("six", "1.0")).unwrap();
        assert_eq!(newer, Some(releases("six", &["2.0"])));
    }

    #[test]
    fn newer_than_is_absent_when_nothing_is_strictly_greater() {
        let available = releases("six", &["1.0", "1.1", "2.0"]);

        assert_eq!(available.newer_than(&pinned("six", "2.0")).unwrap(), None);
        // semantically equal forms cannot win as newer
        assert_eq!(available.newer_than(&pinned("six", "2.0.0")).unwrap(), None);
    }

    #[test]
    fn newer_than_rejects_unpinned_requirements() {
        let available = releases("six", &["1.0"]);
        let unpinned = PackageRequirement::new("six", None).unwrap();

        assert_eq!(
            available.newer_than(&unpinned).unwrap_err(),
            VersionError::MissingVersion("six".to_string())
        );
    }

    #[test]
    fn release_index_lookup_is_case_insensitive() {
        let mut index = ReleaseIndex::default();
        index.insert(releases("Flask", &["2.0.1"]));

        assert_eq!(
            index.get_by_name("flask"),
            Some(&releases("Flask", &["2.0.1"]))
        );
        assert_eq!(index.get_by_name("six"), None);
    }
}
