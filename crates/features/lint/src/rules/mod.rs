//! Built-in catalog rules.
//!
//! Each rule inspects the whole catalog and appends findings; rules never stop early, so a
//! single run reports every problem at once.

mod coverage;
mod marketplace;
mod monotonic;
mod pricing;

pub use coverage::TierCoverage;
pub use marketplace::{PopularPlan, SkuFormat};
pub use monotonic::{FeatureMonotonic, ModuleMonotonic, QuotaMonotonic, SupportMonotonic};
pub use pricing::{AnnualPricing, PriceMonotonic};

use crate::finding::Finding;
use autho_catalog::Catalog;
use std::fmt;

/// A single consistency rule.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Stable kebab-case identifier, used in findings and reports.
    fn id(&self) -> &'static str;

    /// One-line human description.
    fn description(&self) -> &'static str;

    fn check(&self, catalog: &Catalog, findings: &mut Vec<Finding>);
}
