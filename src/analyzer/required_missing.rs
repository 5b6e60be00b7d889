//! Reports packages that are required but not installed

use crate::analyzer::{AnalyzeError, Analyzer};
use crate::model::{Advice, AdviceList, InstalledPackages, PackageRequirement, Severity};

/// Flags requirements with no installed counterpart.
pub struct RequiredMissingAnalyzer<'a> {
    requirements: &'a [PackageRequirement],
    installed: &'a InstalledPackages,
}

impl<'a> RequiredMissingAnalyzer<'a> {
    pub fn new(requirements: &'a [PackageRequirement], installed: &'a InstalledPackages) -> Self {
        Self {
            requirements,
            installed,
        }
    }
}

impl Analyzer for RequiredMissingAnalyzer<'_> {
    fn name(&self) -> &'static str {
        "required-missing"
    }

    fn analyze(&self) -> Result<AdviceList, AnalyzeError> {
        let mut advice = Vec::new();

        for requirement in self.requirements {
            if self.installed.get_by_name(requirement.name()).is_none() {
                advice.push(Advice::new(
                    Some(self.name()),
                    Severity::Error,
                    format!(
                        "Dependency '{}' is not installed",
                        requirement.display_name(),
                    ),
                ));
            }
        }

        Ok(AdviceList::new(advice))
    }
}
