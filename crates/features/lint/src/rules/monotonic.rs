//! Upgrading must never take anything away.

use crate::finding::Finding;
use crate::rules::Rule;
use autho_catalog::Catalog;
use autho_domain::{Plan, Quota};

/// Each tier includes every module of the tier below.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleMonotonic;

impl Rule for ModuleMonotonic {
    fn id(&self) -> &'static str {
        "module-monotonic"
    }

    fn description(&self) -> &'static str {
        "modules of a tier are a superset of the previous tier's"
    }

    fn check(&self, catalog: &Catalog, findings: &mut Vec<Finding>) {
        for (lower, upper) in catalog.adjacent() {
            let lost = lower.modules.difference(upper.modules);
            if !lost.is_empty() {
                findings.push(Finding::error(
                    self.id(),
                    Some(upper.tier),
                    format!("drops modules available in {}: {lost}", lower.tier),
                ));
            }
        }
    }
}

/// Each tier includes every feature of the tier below.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureMonotonic;

impl Rule for FeatureMonotonic {
    fn id(&self) -> &'static str {
        "feature-monotonic"
    }

    fn description(&self) -> &'static str {
        "features of a tier are a superset of the previous tier's"
    }

    fn check(&self, catalog: &Catalog, findings: &mut Vec<Finding>) {
        for (lower, upper) in catalog.adjacent() {
            let lost = lower.features.difference(upper.features);
            if !lost.is_empty() {
                findings.push(Finding::error(
                    self.id(),
                    Some(upper.tier),
                    format!("drops features available in {}: {lost}", lower.tier),
                ));
            }
        }
    }
}

/// Quotas, file size, concurrency and retention never shrink.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotaMonotonic;

fn allowances(plan: &Plan) -> [(&'static str, Quota); 6] {
    let limits = &plan.limits;
    [
        ("tasks per month", limits.tasks_per_month),
        ("workflows per month", limits.workflows_per_month),
        ("API calls per day", limits.api_calls_per_day),
        ("max file size (MB)", Quota::Limited(u64::from(limits.max_file_size_mb))),
        ("concurrent workflows", Quota::Limited(u64::from(limits.max_concurrent_workflows))),
        ("data retention (days)", limits.data_retention_days),
    ]
}

impl Rule for QuotaMonotonic {
    fn id(&self) -> &'static str {
        "quota-monotonic"
    }

    fn description(&self) -> &'static str {
        "usage allowances never decrease with tier"
    }

    fn check(&self, catalog: &Catalog, findings: &mut Vec<Finding>) {
        for (lower, upper) in catalog.adjacent() {
            for ((label, below), (_, above)) in allowances(lower).into_iter().zip(allowances(upper)) {
                if above < below {
                    findings.push(Finding::error(
                        self.id(),
                        Some(upper.tier),
                        format!("{label} {above} is below {} ({below})", lower.tier),
                    ));
                }
            }
        }
    }
}

/// Support never gets less involved. A warning: equal support across tiers is common.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupportMonotonic;

impl Rule for SupportMonotonic {
    fn id(&self) -> &'static str {
        "support-monotonic"
    }

    fn description(&self) -> &'static str {
        "support level never decreases with tier"
    }

    fn check(&self, catalog: &Catalog, findings: &mut Vec<Finding>) {
        for (lower, upper) in catalog.adjacent() {
            if upper.limits.support < lower.limits.support {
                findings.push(Finding::warning(
                    self.id(),
                    Some(upper.tier),
                    format!(
                        "{} support is below {} ({})",
                        upper.limits.support, lower.tier, lower.limits.support
                    ),
                ));
            }
        }
    }
}
