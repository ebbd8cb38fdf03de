use crate::finding::Finding;
use crate::rules::Rule;
use autho_catalog::Catalog;
use autho_domain::Tier;
use fxhash::FxHashSet;

/// Every tier of the ladder must have a plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierCoverage;

impl Rule for TierCoverage {
    fn id(&self) -> &'static str {
        "tier-coverage"
    }

    fn description(&self) -> &'static str {
        "every tier from Free to Enterprise has exactly one plan"
    }

    fn check(&self, catalog: &Catalog, findings: &mut Vec<Finding>) {
        // Duplicates are rejected when the catalog is built, so only gaps remain.
        let present: FxHashSet<Tier> = catalog.tiers().collect();
        for tier in Tier::all().filter(|tier| !present.contains(tier)) {
            findings.push(Finding::error(self.id(), Some(tier), "tier has no plan"));
        }
    }
}
