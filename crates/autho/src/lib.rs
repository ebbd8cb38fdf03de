//! Facade crate for the Autho.R pricing tooling.
//! Re-exports domain/kernel primitives and the catalog, lint and document slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `autho` (the `document` feature is on by default).
//! - Call [`open_catalog`] to resolve the active catalog from configuration.

use std::path::Path;
use tracing::debug;

pub use autho_catalog as catalog;
pub use autho_domain as domain;
pub use autho_kernel as kernel;
pub use autho_lint as lint;

#[cfg(feature = "document")]
pub use autho_document as document;

use autho_catalog::{Catalog, CatalogError};
use autho_domain::config::AppConfig;
use autho_lint::{LintOptions, LintReport};

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled slices (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "catalog",
        "lint",
        #[cfg(feature = "document")]
        "document",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Resolves the active catalog.
///
/// An explicit `path` wins over `catalog.path` from the config; with neither, the built-in
/// catalog is used.
///
/// # Errors
/// Returns the [`CatalogError`] of a catalog file that cannot be read or validated.
pub fn open_catalog(config: &AppConfig, path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path.or(config.catalog.path.as_deref()) {
        Some(path) => Catalog::load(path),
        None => {
            debug!("Using the built-in catalog");
            Ok(Catalog::builtin())
        },
    }
}

/// Lints `catalog` with the rule settings from `config`.
#[must_use]
pub fn lint_catalog(config: &AppConfig, catalog: &Catalog) -> LintReport {
    autho_lint::lint(catalog, LintOptions::from(&config.lint))
}

/// Parses the document at `path` and checks it against `catalog` with the settings from
/// `config`.
///
/// # Errors
/// Returns an error only when the document cannot be read; inconsistencies are findings.
#[cfg(feature = "document")]
pub fn check_document(
    config: &AppConfig,
    catalog: &Catalog,
    path: &Path,
) -> Result<LintReport, autho_document::DocumentError> {
    let doc = autho_document::PricingDocument::load(path)?;
    Ok(autho_document::check(&doc, catalog, &autho_document::CheckOptions::from(config)))
}
