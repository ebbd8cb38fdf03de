use autho_domain::Tier;
use serde::Serialize;
use std::fmt;
use strum::{Display, IntoStaticStr};

/// How bad a finding is. Errors always fail a run; warnings only with `--deny-warnings`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// One consistency violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Identifier of the rule or check that produced it, e.g. `price-monotonic`.
    pub rule: &'static str,
    pub severity: Severity,
    /// The tier the finding is about, when it is about one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn error(rule: &'static str, tier: Option<Tier>, message: impl Into<String>) -> Self {
        Self { rule, severity: Severity::Error, tier, message: message.into() }
    }

    #[must_use]
    pub fn warning(rule: &'static str, tier: Option<Tier>, message: impl Into<String>) -> Self {
        Self { rule, severity: Severity::Warning, tier, message: message.into() }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.severity, self.rule)?;
        if let Some(tier) = self.tier {
            write!(f, " {}", tier.display_name())?;
        }
        write!(f, ": {}", self.message)
    }
}
