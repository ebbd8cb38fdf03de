pub mod catalog;
pub mod document;
pub mod lint;

use autho::catalog::Catalog;
use autho::domain::config::AppConfig;
use autho::lint::LintReport;
use serde::Serialize;

/// Everything a handler needs: the resolved config, the active catalog and the output mode.
#[derive(Debug)]
pub struct Session {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub json: bool,
}

/// How a command that ran to completion ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The command worked but found problems (exit code 1).
    Failure,
}

impl Outcome {
    #[must_use]
    pub const fn failed_if(failed: bool) -> Self {
        if failed { Self::Failure } else { Self::Success }
    }
}

/// Pretty-prints `value` as JSON on stdout.
///
/// # Errors
/// Returns an error if `value` cannot be serialized.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a report as text or JSON, depending on the session.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn print_report(session: &Session, report: &LintReport) -> anyhow::Result<()> {
    if session.json {
        print_json(report)
    } else {
        println!("{report}");
        Ok(())
    }
}
