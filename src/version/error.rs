use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version format: {0}")]
    Format(String),

    #[error("Requirement '{0}' carries no version to compare against")]
    MissingVersion(String),
}
