use crate::finding::Finding;
use crate::report::LintReport;
use crate::rules::{
    AnnualPricing, FeatureMonotonic, ModuleMonotonic, PopularPlan, PriceMonotonic, QuotaMonotonic,
    Rule, SkuFormat, SupportMonotonic, TierCoverage,
};
use autho_catalog::Catalog;
use autho_domain::config::LintConfig;
use autho_domain::constants::ANNUAL_MONTHS_BILLED;
use tracing::{debug, instrument};

/// Knobs of the default rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintOptions {
    /// Months charged for a year of annual billing.
    pub annual_multiplier: u32,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self { annual_multiplier: ANNUAL_MONTHS_BILLED }
    }
}

impl From<&LintConfig> for LintOptions {
    fn from(config: &LintConfig) -> Self {
        Self { annual_multiplier: config.annual_multiplier }
    }
}

/// An ordered collection of rules run against a catalog.
#[derive(Debug, Default)]
pub struct Linter {
    rules: Vec<Box<dyn Rule>>,
}

impl Linter {
    /// An empty linter; add rules with [`Linter::with_rule`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in rule, in reporting order.
    #[must_use]
    pub fn default_rules(options: LintOptions) -> Self {
        Self::new()
            .with_rule(TierCoverage)
            .with_rule(ModuleMonotonic)
            .with_rule(FeatureMonotonic)
            .with_rule(QuotaMonotonic)
            .with_rule(SupportMonotonic)
            .with_rule(PriceMonotonic)
            .with_rule(AnnualPricing { multiplier: options.annual_multiplier })
            .with_rule(SkuFormat)
            .with_rule(PopularPlan)
    }

    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| &**rule)
    }

    /// Runs every rule and collects the findings.
    #[instrument(skip_all, fields(plans = catalog.len(), rules = self.rules.len()))]
    pub fn run(&self, catalog: &Catalog) -> LintReport {
        let mut findings: Vec<Finding> = Vec::new();
        for rule in &self.rules {
            let before = findings.len();
            rule.check(catalog, &mut findings);
            debug!(rule = rule.id(), found = findings.len() - before, "Rule checked");
        }
        LintReport::new(findings)
    }
}

/// Lints a catalog with the default rules.
#[must_use]
pub fn lint(catalog: &Catalog, options: LintOptions) -> LintReport {
    Linter::default_rules(options).run(catalog)
}
