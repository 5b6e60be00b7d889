//! Reports packages that are required and installed

use crate::analyzer::{AnalyzeError, Analyzer};
use crate::model::{Advice, AdviceList, InstalledPackages, PackageRequirement, Severity};

/// Flags requirements that are satisfied by an installed package.
///
/// Requirements with no installed counterpart produce nothing here; absence
/// is the missing analyzer's concern.
pub struct RequiredInstalledAnalyzer<'a> {
    requirements: &'a [PackageRequirement],
    installed: &'a InstalledPackages,
}

impl<'a> RequiredInstalledAnalyzer<'a> {
    pub fn new(requirements: &'a [PackageRequirement], installed: &'a InstalledPackages) -> Self {
        Self {
            requirements,
            installed,
        }
    }
}

impl Analyzer for RequiredInstalledAnalyzer<'_> {
    fn name(&self) -> &'static str {
        "required-installed"
    }

    fn analyze(&self) -> Result<AdviceList, AnalyzeError> {
        let mut advice = Vec::new();

        for requirement in self.requirements {
            if let Some(installed) = self.installed.get_by_name(requirement.name()) {
                advice.push(Advice::new(
                    Some(self.name()),
                    Severity::Info,
                    format!(
                        "Dependency '{}' is satisfied by '{}'",
                        requirement.display_name(),
                        installed.display_name(),
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
    use crate::model::InstalledPackage;

    fn environment(packages: &[(&str, &str)]) -> InstalledPackages {
        InstalledPackages::new(
            packages
                .iter()
                .map(|(name, version)| InstalledPackage::new(*name, *version).unwrap()),
        )
    }

    #[test]
    fn satisfied_requirement_yields_one_info_advice() {
        let requirements = vec![PackageRequirement::new("six", None).unwrap()];
        let installed = environment(&[("six", "1.10")]);

        let advice_list = RequiredInstalledAnalyzer::new(&requirements, &installed)
            .analyze()
            .unwrap();

        assert_eq!(
            advice_list,
            AdviceList::new(vec![Advice::new(
                Some("required-installed"),
                Severity::Info,
                "Dependency 'six' is satisfied by 'six-1.10'",
            )])
        );
    }

    #[test]
    fn unmatched_requirement_yields_nothing() {
        let requirements = vec![PackageRequirement::new("flask", None).unwrap()];
        let installed = environment(&[("six", "1.10")]);

        let advice_list = RequiredInstalledAnalyzer::new(&requirements, &installed)
            .analyze()
            .unwrap();

        assert!(advice_list.is_empty());
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        let requirements = vec![PackageRequirement::new("Flask", Some("2.0".to_string())).unwrap()];
        let installed = environment(&[("flask", "2.0.1")]);

        let advice_list = RequiredInstalledAnalyzer::new(&requirements, &installed)
            .analyze()
            .unwrap();

        assert_eq!(
            advice_list,
            AdviceList::new(vec![Advice::new(
                Some("required-installed"),
                Severity::Info,
                "Dependency 'Flask-2.0' is satisfied by 'flask-2.0.1'",
            )])
        );
    }

    #[test]
    fn advice_follows_requirement_order() {
        let requirements = vec![
            PackageRequirement::new("six", None).unwrap(),
            PackageRequirement::new("flask", None).unwrap(),
        ];
        let installed = environment(&[("flask", "2.0.1"), ("six", "1.10")]);

        let advice_list = RequiredInstalledAnalyzer::new(&requirements, &installed)
            .analyze()
            .unwrap();

        let messages: Vec<&str> = advice_list
            .iter()
            .map(|advice| advice.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Dependency 'six' is satisfied by 'six-1.10'",
                "Dependency 'flask' is satisfied by 'flask-2.0.1'",
            ]
        );
    }
}
