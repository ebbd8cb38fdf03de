//! # Catalog lint
//!
//! Rules that keep a pricing catalog internally consistent: every tier present, upgrades
//! that only ever add modules, features and allowances, prices that rise with the tier,
//! annual billing at a fixed number of months, and well-formed marketplace SKUs.
//!
//! The [`Finding`] / [`LintReport`] types are shared with the pricing document checks.
//!
//! ```
//! use autho_catalog::Catalog;
//! use autho_lint::{LintOptions, lint};
//!
//! let report = lint(&Catalog::builtin(), LintOptions::default());
//! assert!(report.is_clean(), "{report}");
//! ```

mod finding;
mod linter;
mod report;
pub mod rules;

pub use finding::{Finding, Severity};
pub use linter::{LintOptions, Linter, lint};
pub use report::LintReport;
pub use rules::Rule;
