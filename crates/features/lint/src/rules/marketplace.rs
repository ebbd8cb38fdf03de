use crate::finding::Finding;
use crate::rules::Rule;
use autho_catalog::Catalog;

/// Azure SKUs follow `author-<tier>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkuFormat;

impl Rule for SkuFormat {
    fn id(&self) -> &'static str {
        "sku-format"
    }

    fn description(&self) -> &'static str {
        "marketplace SKU is `author-` followed by the tier name"
    }

    fn check(&self, catalog: &Catalog, findings: &mut Vec<Finding>) {
        for plan in catalog {
            let expected = plan.tier.default_sku();
            if plan.sku != expected {
                findings.push(Finding::error(
                    self.id(),
                    Some(plan.tier),
                    format!("SKU `{}` should be `{expected}`", plan.sku),
                ));
            }
        }
    }
}

/// Exactly one plan carries the "most popular" badge.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopularPlan;

impl Rule for PopularPlan {
    fn id(&self) -> &'static str {
        "popular-plan"
    }

    fn description(&self) -> &'static str {
        "exactly one plan is marked popular"
    }

    fn check(&self, catalog: &Catalog, findings: &mut Vec<Finding>) {
        let popular: Vec<_> = catalog.plans().iter().filter(|plan| plan.popular).collect();
        match popular.as_slice() {
            [_] => {},
            [] => findings.push(Finding::warning(self.id(), None, "no plan is marked popular")),
            many => {
                let names: Vec<_> = many.iter().map(|plan| plan.tier.display_name()).collect();
                findings.push(Finding::warning(
                    self.id(),
                    None,
                    format!("{} plans are marked popular: {}", many.len(), names.join(", ")),
                ));
            },
        }
    }
}
