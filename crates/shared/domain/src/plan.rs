use crate::features::FeatureSet;
use crate::modules::ModuleSet;
use crate::price::Price;
use crate::quota::Quota;
use crate::support::SupportLevel;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};

/// Usage allowances and support channel of a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierLimits {
    pub tasks_per_month: Quota,
    pub workflows_per_month: Quota,
    pub api_calls_per_day: Quota,
    pub max_file_size_mb: u32,
    pub max_concurrent_workflows: u32,
    pub data_retention_days: Quota,
    pub support: SupportLevel,
}

/// One tier of the pricing sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    pub tier: Tier,
    pub name: String,
    pub description: String,
    pub monthly: Price,
    pub annual: Price,
    /// Prices are a floor ("starting at"), as for Enterprise.
    #[serde(default)]
    pub starting_price: bool,
    /// Highlighted as the recommended plan.
    #[serde(default)]
    pub popular: bool,
    /// Azure Marketplace SKU.
    pub sku: String,
    pub modules: ModuleSet,
    #[serde(default)]
    pub features: FeatureSet,
    pub limits: TierLimits,
}

impl Plan {
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.monthly.is_zero() && self.annual.is_zero()
    }

    #[must_use]
    pub const fn includes_module(&self, module: ModuleSet) -> bool {
        self.modules.contains(module)
    }

    #[must_use]
    pub const fn has_feature(&self, feature: FeatureSet) -> bool {
        self.features.contains(feature)
    }

    #[must_use]
    pub const fn module_count(&self) -> u32 {
        self.modules.count()
    }

    /// Annual price spread over twelve months, rounded to the cent.
    #[must_use]
    pub const fn annual_monthly_equivalent(&self) -> Price {
        self.annual.split(12)
    }

    /// Whole-percent discount of annual billing versus twelve monthly payments.
    ///
    /// `None` for plans without a monthly price.
    #[must_use]
    pub const fn annual_savings_percent(&self) -> Option<u32> {
        let full_year = self.monthly.times(12).cents();
        if full_year == 0 {
            return None;
        }
        let savings = full_year.saturating_sub(self.annual.cents());
        let pct = (savings * 100 + full_year / 2) / full_year;
        #[allow(clippy::cast_possible_truncation)]
        Some(pct as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starter() -> Plan {
        Plan {
            tier: Tier::Starter,
            name: "Starter".to_owned(),
            description: "For individuals and small projects".to_owned(),
            monthly: Price::from_dollars(29),
            annual: Price::from_dollars(290),
            starting_price: false,
            popular: false,
            sku: "author-starter".to_owned(),
            modules: ModuleSet::STANDARD,
            features: FeatureSet::SCHEDULING | FeatureSet::API_ACCESS,
            limits: TierLimits {
                tasks_per_month: Quota::Limited(1_000),
                workflows_per_month: Quota::Limited(25),
                api_calls_per_day: Quota::Limited(500),
                max_file_size_mb: 50,
                max_concurrent_workflows: 3,
                data_retention_days: Quota::Limited(30),
                support: SupportLevel::Email,
            },
        }
    }

    #[test]
    fn annual_discount_is_seventeen_percent() {
        let plan = starter();
        assert_eq!(plan.annual_savings_percent(), Some(17));
        assert_eq!(plan.annual_monthly_equivalent(), Price::from_cents(2_417));
        assert!(!plan.is_free());
    }

    #[test]
    fn inclusion_queries() {
        let plan = starter();
        assert!(plan.includes_module(ModuleSet::SCRAPER));
        assert!(!plan.includes_module(ModuleSet::DESKTOP));
        assert!(plan.has_feature(FeatureSet::SCHEDULING));
        assert!(!plan.has_feature(FeatureSet::WEBHOOKS));
        assert_eq!(plan.module_count(), 7);
    }

    #[test]
    fn toml_roundtrip_keeps_wire_conventions() {
        let plan = starter();
        let raw = toml::to_string(&plan).unwrap();
        assert!(raw.contains(r#"monthly = "29.00""#));
        assert!(raw.contains(r#"tier = "starter""#));
        let back: Plan = toml::from_str(&raw).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut value = serde_json::to_value(starter()).unwrap();
        value["discount_code"] = serde_json::json!("SPRING");
        assert!(serde_json::from_value::<Plan>(value).is_err());
    }
}
