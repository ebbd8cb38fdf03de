use super::{Outcome, Session, print_report};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::info;

/// Checks a pricing sheet against the active catalog.
///
/// # Errors
/// Returns an error if the document cannot be read.
pub fn check_document(
    session: &Session,
    path: Option<&Path>,
    deny_warnings: bool,
) -> anyhow::Result<Outcome> {
    let path = path.unwrap_or(session.config.document.path.as_path());
    let deny_warnings = deny_warnings || session.config.lint.deny_warnings;

    let report = autho::check_document(&session.config, &session.catalog, path)?;
    info!(path = %path.display(), findings = report.findings.len(), "Document checked");

    print_report(session, &report)?;
    Ok(Outcome::failed_if(report.fails(deny_warnings)))
}

/// Renders the canonical pricing sheet to stdout or `output`.
///
/// # Errors
/// Returns an error if `output` cannot be written.
pub fn render_document(session: &Session, output: Option<&Path>) -> anyhow::Result<Outcome> {
    let text = autho::document::render(&session.catalog, &session.config.contacts);
    match output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("Writing {}", path.display()))?;
            info!(path = %path.display(), "Pricing sheet written");
        },
        None => print!("{text}"),
    }
    Ok(Outcome::Success)
}
