//! A package actually present in a Python environment

use std::collections::HashMap;

use crate::model::error::ModelError;

/// One installed package with exactly one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    name: String,
    version: String,
}

impl InstalledPackage {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(Self {
            name,
            version: version.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn display_name(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

/// Lookup of installed packages by name
///
/// Lookups are case-insensitive exact matches, no fuzzy matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledPackages {
    by_name: HashMap<String, InstalledPackage>,
}

impl InstalledPackages {
    pub fn new(packages: impl IntoIterator<Item = InstalledPackage>) -> Self {
        let by_name = packages
            .into_iter()
            .map(|package| (package.name.to_lowercase(), package))
            .collect();
        Self { by_name }
    }

    pub fn get_by_name(&self, name: &str) -> Option<&InstalledPackage> {
        self.by_name.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
