//! Parser trait definition

use crate::model::PackageRequirement;

/// Trait for parsing requirements manifests
pub trait Parser {
    /// Parse manifest content into declared requirements, in file order
    fn parse(&self, content: &str) -> Result<Vec<PackageRequirement>, ParseError>;
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A line that is neither a comment, an option, nor a valid requirement
    #[error("Invalid requirement on line {line}: {reason}")]
    InvalidRequirement { line: usize, reason: String },

    /// The same package declared twice; names are case-insensitively unique
    #[error("Duplicate requirement '{name}' on line {line}")]
    DuplicateRequirement { name: String, line: usize },
}
