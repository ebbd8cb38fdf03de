use crate::catalog::Catalog;
use autho_domain::{FeatureSet, ModuleSet, Plan, Price, Tier, TierLimits};
use serde::Serialize;

/// A flattened, display-ready view of one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingRow {
    pub tier: Tier,
    pub name: String,
    pub description: String,
    pub monthly_price: Price,
    pub annual_price: Price,
    pub annual_monthly_equivalent: Price,
    pub annual_savings_percent: Option<u32>,
    pub starting_price: bool,
    pub popular: bool,
    pub marketplace_sku: String,
    pub limits: TierLimits,
    pub modules: ModuleSet,
    pub features: FeatureSet,
}

impl From<&Plan> for PricingRow {
    fn from(plan: &Plan) -> Self {
        Self {
            tier: plan.tier,
            name: plan.name.clone(),
            description: plan.description.clone(),
            monthly_price: plan.monthly,
            annual_price: plan.annual,
            annual_monthly_equivalent: plan.annual_monthly_equivalent(),
            annual_savings_percent: plan.annual_savings_percent(),
            starting_price: plan.starting_price,
            popular: plan.popular,
            marketplace_sku: plan.sku.clone(),
            limits: plan.limits.clone(),
            modules: plan.modules,
            features: plan.features,
        }
    }
}

impl Catalog {
    /// One row per plan, in tier order.
    #[must_use]
    pub fn pricing_table(&self) -> Vec<PricingRow> {
        self.plans().iter().map(PricingRow::from).collect()
    }
}
