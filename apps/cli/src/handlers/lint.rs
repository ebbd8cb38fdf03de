use super::{Outcome, Session, print_json, print_report};
use autho::lint::{LintOptions, Linter};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct RuleSummary {
    id: &'static str,
    description: &'static str,
}

/// Lints the active catalog.
///
/// `multiplier` and `deny_warnings` override the `[lint]` config section.
///
/// # Errors
/// Returns an error if the report cannot be printed as JSON.
pub fn lint_catalog(
    session: &mut Session,
    multiplier: Option<u32>,
    deny_warnings: bool,
) -> anyhow::Result<Outcome> {
    if let Some(multiplier) = multiplier {
        session.config.lint.annual_multiplier = multiplier;
    }
    let deny_warnings = deny_warnings || session.config.lint.deny_warnings;

    let report = autho::lint_catalog(&session.config, &session.catalog);
    info!(
        errors = report.errors().count(),
        warnings = report.warnings().count(),
        "Catalog linted"
    );

    print_report(session, &report)?;
    Ok(Outcome::failed_if(report.fails(deny_warnings)))
}

/// Prints the id and description of every catalog rule, in reporting order.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn list_rules(session: &Session) -> anyhow::Result<Outcome> {
    let linter = Linter::default_rules(LintOptions::from(&session.config.lint));
    let rules: Vec<_> = linter
        .rules()
        .map(|rule| RuleSummary { id: rule.id(), description: rule.description() })
        .collect();

    if session.json {
        print_json(&rules)?;
    } else {
        for rule in &rules {
            println!("{:<18} {}", rule.id, rule.description);
        }
    }
    Ok(Outcome::Success)
}
