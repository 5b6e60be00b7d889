//! A dependency as declared in the requirements manifest

use crate::model::error::ModelError;

/// A declared dependency: a name plus an optional minimum/pinned version
///
/// Immutable once constructed. Name uniqueness within a manifest is the
/// parser's responsibility; non-emptiness is enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequirement {
    name: String,
    version: Option<String>,
}

impl PackageRequirement {
    pub fn new(name: impl Into<String>, version: Option<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(Self { name, version })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Human-readable form: `name` when unpinned, `name-version` otherwise
    pub fn display_name(&self) -> String {
        match &self.version {
            Some(version) => format!("{}-{}", self.name, version),
            None => self.name.clone(),
        }
    }
}
