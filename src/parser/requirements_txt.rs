//! requirements.txt parser (PEP 508 entries, one per line)
//!
//! Comments and blank lines are ignored, pip option lines (`-r`, `-e`,
//! `--index-url` ...) are skipped, and URL requirements are skipped as they
//! don't exist on PyPI. The declared minimum/pinned version is taken from
//! the first `==`/`===`/`>=`/`>`/`~=` specifier; exclusion-only specifiers
//! leave the requirement unpinned.

use std::collections::HashSet;
use std::str::FromStr;

use pep508_rs::pep440_rs::Operator;
use pep508_rs::{Requirement, VerbatimUrl, VersionOrUrl};
use tracing::warn;

use crate::model::PackageRequirement;
use crate::parser::traits::{ParseError, Parser};

/// Parser for requirements.txt files
pub struct RequirementsTxtParser;

impl RequirementsTxtParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RequirementsTxtParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for RequirementsTxtParser {
    fn parse(&self, content: &str) -> Result<Vec<PackageRequirement>, ParseError> {
        let mut requirements = Vec::new();
        let mut seen = HashSet::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = index + 1;
            let entry = strip_comment(raw_line).trim();

            if entry.is_empty() {
                continue;
            }
            if entry.starts_with('-') {
                warn!("Skipping pip option on line {}: {}", line, entry);
                continue;
            }

            let Some(requirement) = parse_entry(entry, line)? else {
                continue;
            };

            if !seen.insert(requirement.name().to_lowercase()) {
                return Err(ParseError::DuplicateRequirement {
                    name: requirement.name().to_string(),
                    line,
                });
            }
            requirements.push(requirement);
        }

        Ok(requirements)
    }
}

/// Drop a whole-line or trailing ` #` comment
fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    match line.find(" #") {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse one PEP 508 entry; URL requirements come back as None
fn parse_entry(entry: &str, line: usize) -> Result<Option<PackageRequirement>, ParseError> {
    let requirement =
        Requirement::<VerbatimUrl>::from_str(entry).map_err(|e| ParseError::InvalidRequirement {
            line,
            reason: e.to_string(),
        })?;

    let version = match &requirement.version_or_url {
        Some(VersionOrUrl::Url(_)) => {
            warn!("Skipping URL requirement on line {}: {}", line, entry);
            return Ok(None);
        }
        Some(VersionOrUrl::VersionSpecifier(specifiers)) => specifiers
            .iter()
            .find(|specifier| {
                matches!(
                    specifier.operator(),
                    Operator::Equal
                        | Operator::ExactEqual
                        | Operator::GreaterThanEqual
                        | Operator::GreaterThan
                        | Operator::TildeEqual
                )
            })
            .map(|specifier| specifier.version().to_string()),
        None => None,
    };

    let requirement = PackageRequirement::new(requirement.name.to_string(), version).map_err(
        |e| ParseError::InvalidRequirement {
            line,
            reason: e.to_string(),
        },
    )?;
    Ok(Some(requirement))
}
