use std::cmp::Ordering;

use semver::Version;
use tracing::warn;

use crate::version::error::VersionError;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Partial release forms like "1" or "1.2" are padded with zeros before
/// parsing, so "1.0" and "1.0.0" end up equal. Pre-release and build
/// suffixes survive the padding ("1.0-rc.1" parses as 1.0.0-rc.1).
/// A 'v' prefix is not stripped.
pub fn parse_version(version: &str) -> Option<Version> {
    let (release, suffix) = match version.find(['-', '+']) {
        Some(pos) => version.split_at(pos),
        None => (version, ""),
    };
    let normalized = match release.split('.').count() {
        1 => format!("{release}.0.0{suffix}"),
        2 => format!("{release}.0{suffix}"),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Total order over two version strings per semver precedence.
///
/// Numeric release segments compare component-wise, pre-release sorts before
/// the corresponding release, build metadata is ignored. An unparseable
/// input is an error, never a lexical-string fallback.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering, VersionError> {
    let version_a = parse_version(a).ok_or_else(|| VersionError::Format(a.to_string()))?;
    let version_b = parse_version(b).ok_or_else(|| VersionError::Format(b.to_string()))?;
    // cmp_precedence, not Ord: the derived order tie-breaks on build metadata
    Ok(version_a.cmp_precedence(&version_b))
}

/// The release portion of a version string, pre-release/build metadata
/// stripped, segment count preserved as written ("2.0" stays "2.0").
pub fn base_version(version: &str) -> Result<String, VersionError> {
    if parse_version(version).is_none() {
        return Err(VersionError::Format(version.to_string()));
    }
    let release = version.split(['-', '+']).next().unwrap_or(version);
    Ok(release.to_string())
}

/// Find the highest available version strictly greater than `current`.
///
/// Returns the winner's base form, or None if nothing qualifies. Ties under
/// semantic equality ("1.0" vs "1.0.0") are excluded by the strict
/// comparison. `current` must parse; available entries that do not parse
/// come from external index data and are skipped instead.
pub fn find_newer_than<'a>(
    current: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Result<Option<String>, VersionError> {
    let current_version =
        parse_version(current).ok_or_else(|| VersionError::Format(current.to_string()))?;

    let newest = available
        .into_iter()
        .filter_map(|raw| match parse_version(raw) {
            Some(parsed) => Some((parsed, raw)),
            None => {
                warn!("Skipping unparseable release version '{}'", raw);
                None
            }
        })
        .filter(|(parsed, _)| parsed.cmp_precedence(&current_version) == Ordering::Greater)
        .max_by(|(a, _), (b, _)| a.cmp_precedence(b));

    match newest {
        Some((_, raw)) => base_version(raw).map(Some),
        None => Ok(None),
    }
}
