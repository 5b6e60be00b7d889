//! Reports required packages with a newer release on the index

use crate::analyzer::{AnalyzeError, Analyzer};
use crate::model::{Advice, AdviceList, PackageRequirement, ReleaseIndex, Severity};

/// Flags pinned requirements for which a newer release exists upstream.
///
/// Requirements without a version are skipped, not an error. A name absent
/// from the release index is a known condition, reported at debug severity
/// so one unknown package never aborts the rest of the analysis.
pub struct RequiredTrackedAnalyzer<'a> {
    requirements: &'a [PackageRequirement],
    releases: &'a ReleaseIndex,
}

impl<'a> RequiredTrackedAnalyzer<'a> {
    pub fn new(requirements: &'a [PackageRequirement], releases: &'a ReleaseIndex) -> Self {
        Self {
            requirements,
            releases,
        }
    }
}

impl Analyzer for RequiredTrackedAnalyzer<'_> {
    fn name(&self) -> &'static str {
        "required-tracked"
    }

    fn analyze(&self) -> Result<AdviceList, AnalyzeError> {
        let mut advice = Vec::new();

        for requirement in self.requirements {
            if requirement.version().is_none() {
                continue;
            }

            let Some(releases) = self.releases.get_by_name(requirement.name()) else {
                advice.push(Advice::new(
                    Some(self.name()),
                    Severity::Debug,
                    format!(
                        "No release data available for '{}'",
                        requirement.display_name(),
                    ),
                ));
                continue;
            };

            if let Some(newer) = releases.newer_than(requirement)? {
                advice.push(Advice::new(
                    Some(self.name()),
                    Severity::Warning,
                    format!(
                        "Dependency '{}' can be upgraded to '{}'",
                        requirement.display_name(),
                        newer.display_name_single()?,
                    ),
                ));
            }
        }

        Ok(AdviceList::new(advice))
    }
}
