use crate::finding::{Finding, Severity};
use serde::Serialize;
use std::fmt;

/// Everything a lint run or document check found, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub findings: Vec<Finding>,
}

impl LintReport {
    #[must_use]
    pub const fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Warning)
    }

    /// Findings produced by one rule.
    pub fn by_rule<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| f.rule == rule)
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }

    /// Whether the run should fail: on any error, or on any finding when warnings are denied.
    #[must_use]
    pub fn fails(&self, deny_warnings: bool) -> bool {
        if deny_warnings { !self.is_clean() } else { self.has_errors() }
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for finding in &self.findings {
            writeln!(f, "{finding}")?;
        }
        if self.is_clean() {
            return f.write_str("No findings.");
        }
        let (errors, warnings) = (self.errors().count(), self.warnings().count());
        write!(f, "{errors} error(s), {warnings} warning(s)")
    }
}

impl FromIterator<Finding> for LintReport {
    fn from_iter<I: IntoIterator<Item = Finding>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
