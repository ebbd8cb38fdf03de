use crate::finding::Finding;
use crate::rules::Rule;
use autho_catalog::Catalog;
use autho_domain::Tier;
use autho_domain::constants::ANNUAL_MONTHS_BILLED;

/// Monthly price strictly increases with tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceMonotonic;

impl Rule for PriceMonotonic {
    fn id(&self) -> &'static str {
        "price-monotonic"
    }

    fn description(&self) -> &'static str {
        "monthly price strictly increases with tier"
    }

    fn check(&self, catalog: &Catalog, findings: &mut Vec<Finding>) {
        for (lower, upper) in catalog.adjacent() {
            if upper.monthly <= lower.monthly {
                findings.push(Finding::error(
                    self.id(),
                    Some(upper.tier),
                    format!(
                        "monthly {} is not above {} ({})",
                        upper.monthly, lower.tier, lower.monthly
                    ),
                ));
            }
        }
    }
}

/// Annual billing charges a fixed number of months; the free tier costs nothing.
#[derive(Debug, Clone, Copy)]
pub struct AnnualPricing {
    pub multiplier: u32,
}

impl Default for AnnualPricing {
    fn default() -> Self {
        Self { multiplier: ANNUAL_MONTHS_BILLED }
    }
}

impl Rule for AnnualPricing {
    fn id(&self) -> &'static str {
        "annual-pricing"
    }

    fn description(&self) -> &'static str {
        "annual price equals the monthly price times the billed months"
    }

    fn check(&self, catalog: &Catalog, findings: &mut Vec<Finding>) {
        for plan in catalog {
            if plan.tier == Tier::Free && !plan.is_free() {
                findings.push(Finding::error(
                    self.id(),
                    Some(plan.tier),
                    format!("free tier is priced {} / {}", plan.monthly, plan.annual),
                ));
                continue;
            }

            let expected = plan.monthly.times(self.multiplier);
            if plan.annual != expected {
                findings.push(Finding::error(
                    self.id(),
                    Some(plan.tier),
                    format!(
                        "annual {} should be {} x {} = {expected}",
                        plan.annual, self.multiplier, plan.monthly
                    ),
                ));
            }
        }
    }
}
