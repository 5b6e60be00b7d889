use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Package name cannot be empty")]
    EmptyName,

    #[error("Cannot display '{name}' as a single release: {count} versions present")]
    NotSingleVersion { name: String, count: usize },
}
