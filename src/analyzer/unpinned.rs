//! Reports required packages declared without a version constraint

use crate::analyzer::{AnalyzeError, Analyzer};
use crate::model::{Advice, AdviceList, PackageRequirement, Severity};

/// Flags requirements that carry no version, so builds are not reproducible.
pub struct UnpinnedAnalyzer<'a> {
    requirements: &'a [PackageRequirement],
}

impl<'a> UnpinnedAnalyzer<'a> {
    pub fn new(requirements: &'a [PackageRequirement]) -> Self {
        Self { requirements }
    }
}

impl Analyzer for UnpinnedAnalyzer<'_> {
    fn name(&self) -> &'static str {
        "unpinned"
    }

    fn analyze(&self) -> Result<AdviceList, AnalyzeError> {
        let mut advice = Vec::new();

        for requirement in self.requirements {
            if requirement.version().is_none() {
                advice.push(Advice::new(
                    Some(self.name()),
                    Severity::Warning,
                    format!(
                        "Dependency '{}' is not pinned to a version",
                        requirement.display_name(),
                    ),
                ));
            }
        }

        Ok(AdviceList::new(advice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpinned_requirement_yields_one_warning_advice() {
        let requirements = vec![PackageRequirement::new("six", None).unwrap()];

        let advice_list = UnpinnedAnalyzer::new(&requirements).analyze().unwrap();

        assert_eq!(
            advice_list,
            AdviceList::new(vec![Advice::new(
                Some("unpinned"),
                Severity::Warning,
                "Dependency 'six' is not pinned to a version",
            )])
        );
    }

    #[test]
    fn pinned_requirement_yields_nothing() {
        let requirements = vec![PackageRequirement::new("six", Some("1.9".to_string())).unwrap()];

        let advice_list = UnpinnedAnalyzer::new(&requirements).analyze().unwrap();

        assert!(advice_list.is_empty());
    }
}
