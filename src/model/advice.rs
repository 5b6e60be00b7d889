//! A single analysis finding

use std::fmt;

/// How serious a finding is
///
/// Ordered from least to most severe; `warning` and above are problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Returns the string representation of the severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Whether a finding at this severity counts as a problem
    pub fn is_problem(&self) -> bool {
        *self >= Severity::Warning
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding produced by an analyzer
///
/// Equality is structural over all three fields: two advices with the same
/// origin, severity, and message are the same advice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    /// Name of the producing analyzer, absent for synthetic advice
    pub analyzer: Option<&'static str>,
    pub severity: Severity,
    pub message: String,
}

impl Advice {
    pub fn new(analyzer: Option<&'static str>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            analyzer,
            severity,
            message: message.into(),
        }
    }
}
