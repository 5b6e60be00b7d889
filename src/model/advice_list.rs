//! Ordered collection of advice representing one analysis run's output

use crate::model::advice::Advice;

/// The advice produced by one or more analyzer runs, in emission order
///
/// Equality is sequence equality: same length, pairwise-equal advice, same
/// order. Merging concatenates, so the first analyzer's findings stay ahead
/// of the second's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdviceList {
    advice: Vec<Advice>,
}

impl AdviceList {
    pub fn new(advice: Vec<Advice>) -> Self {
        Self { advice }
    }

    /// True iff any contained advice is at problem severity
    pub fn has_problems(&self) -> bool {
        self.advice.iter().any(|advice| advice.severity.is_problem())
    }

    /// Append another list's advice after this list's own
    pub fn extend(&mut self, other: AdviceList) {
        self.advice.extend(other.advice);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Advice> {
        self.advice.iter()
    }

    pub fn len(&self) -> usize {
        self.advice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advice.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::advice::Severity;

    fn rains_and_snows() -> AdviceList {
        AdviceList::new(vec![
            Advice::new(None, Severity::Info, "It rains"),
            Advice::new(None, Severity::Debug, "It snows"),
        ])
    }

    #[test]
    fn equality_is_order_and_length_sensitive() {
        let full = rains_and_snows();

        // missing one advice
        let shorter = AdviceList::new(vec![Advice::new(None, Severity::Info, "It rains")]);

        // severity differs
        let escalated = AdviceList::new(vec![
            Advice::new(None, Severity::Error, "It rains"),
            Advice::new(None, Severity::Debug, "It snows"),
        ]);

        // same advice, swapped order
        let reversed = AdviceList::new(vec![
            Advice::new(None, Severity::Debug, "It snows"),
            Advice::new(None, Severity::Info, "It rains"),
        ]);

        assert_eq!(full, rains_and_snows());
        assert_ne!(full, shorter);
        assert_ne!(full, escalated);
        assert_ne!(full, reversed);
    }

    #[test]
    fn has_problems_requires_warning_or_above() {
        assert!(!rains_and_snows().has_problems());
        assert!(!AdviceList::default().has_problems());

        let with_error = AdviceList::new(vec![
            Advice::new(None, Severity::Error, "It rains"),
            Advice::new(None, Severity::Debug, "It snows"),
        ]);
        assert!(with_error.has_problems());

        let with_warning = AdviceList::new(vec![Advice::new(None, Severity::Warning, "It hails")]);
        assert!(with_warning.has_problems());
    }

    #[test]
    fn extend_concatenates_preserving_order() {
        let mut merged = rains_and_snows();
        merged.extend(AdviceList::new(vec![Advice::new(
            None,
            Severity::Warning,
            "It hails",
        )]));

        let messages: Vec<&str> = merged.iter().map(|advice| advice.message.as_str()).collect();
        assert_eq!(messages, vec!["It rains", "It snows", "It hails"]);
    }
}
