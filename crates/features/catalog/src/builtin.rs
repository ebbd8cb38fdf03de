//! The published Autho.R price list.

use autho_domain::{FeatureSet, ModuleSet, Plan, Price, Quota, SupportLevel, Tier, TierLimits};

/// Plans exactly as printed on the pricing sheet, in tier order.
#[must_use]
pub fn builtin_plans() -> Vec<Plan> {
    vec![
        Plan {
            tier: Tier::Free,
            name: "Free".to_owned(),
            description: "Get started with basic automation".to_owned(),
            monthly: Price::ZERO,
            annual: Price::ZERO,
            starting_price: false,
            popular: false,
            sku: Tier::Free.default_sku(),
            modules: ModuleSet::BASIC,
            features: FeatureSet::empty(),
            limits: TierLimits {
                tasks_per_month: Quota::Limited(100),
                workflows_per_month: Quota::Limited(5),
                api_calls_per_day: Quota::Limited(50),
                max_file_size_mb: 10,
                max_concurrent_workflows: 1,
                data_retention_days: Quota::Limited(7),
                support: SupportLevel::Community,
            },
        },
        Plan {
            tier: Tier::Starter,
            name: "Starter".to_owned(),
            description: "For individuals and small projects".to_owned(),
            monthly: Price::from_dollars(29),
            annual: Price::from_dollars(290),
            starting_price: false,
            popular: false,
            sku: Tier::Starter.default_sku(),
            modules: ModuleSet::STANDARD,
            features: FeatureSet::SCHEDULING.union(FeatureSet::API_ACCESS),
            limits: TierLimits {
                tasks_per_month: Quota::Limited(1_000),
                workflows_per_month: Quota::Limited(25),
                api_calls_per_day: Quota::Limited(500),
                max_file_size_mb: 50,
                max_concurrent_workflows: 3,
                data_retention_days: Quota::Limited(30),
                support: SupportLevel::Email,
            },
        },
        Plan {
            tier: Tier::Professional,
            name: "Professional".to_owned(),
            description: "For growing teams and businesses".to_owned(),
            monthly: Price::from_dollars(79),
            annual: Price::from_dollars(790),
            starting_price: false,
            popular: true,
            sku: Tier::Professional.default_sku(),
            modules: ModuleSet::ADVANCED,
            features: professional_features(),
            limits: TierLimits {
                tasks_per_month: Quota::Limited(10_000),
                workflows_per_month: Quota::Limited(100),
                api_calls_per_day: Quota::Limited(5_000),
                max_file_size_mb: 200,
                max_concurrent_workflows: 10,
                data_retention_days: Quota::Limited(90),
                support: SupportLevel::Priority,
            },
        },
        Plan {
            tier: Tier::Business,
            name: "Business".to_owned(),
            description: "For organizations with advanced needs".to_owned(),
            monthly: Price::from_dollars(199),
            annual: Price::from_dollars(1_990),
            starting_price: false,
            popular: false,
            sku: Tier::Business.default_sku(),
            modules: ModuleSet::ALL,
            features: business_features(),
            limits: TierLimits {
                tasks_per_month: Quota::Limited(50_000),
                workflows_per_month: Quota::Limited(500),
                api_calls_per_day: Quota::Limited(25_000),
                max_file_size_mb: 500,
                max_concurrent_workflows: 25,
                data_retention_days: Quota::Limited(365),
                support: SupportLevel::Dedicated,
            },
        },
        Plan {
            tier: Tier::Enterprise,
            name: "Enterprise".to_owned(),
            description: "Custom solutions for large organizations".to_owned(),
            monthly: Price::from_dollars(499),
            annual: Price::from_dollars(4_990),
            starting_price: true,
            popular: false,
            sku: Tier::Enterprise.default_sku(),
            modules: ModuleSet::ALL,
            features: FeatureSet::ALL,
            limits: TierLimits {
                tasks_per_month: Quota::Unlimited,
                workflows_per_month: Quota::Unlimited,
                api_calls_per_day: Quota::Unlimited,
                max_file_size_mb: 2_000,
                max_concurrent_workflows: 100,
                data_retention_days: Quota::Unlimited,
                support: SupportLevel::Dedicated,
            },
        },
    ]
}

const fn professional_features() -> FeatureSet {
    FeatureSet::SCHEDULING
        .union(FeatureSet::API_ACCESS)
        .union(FeatureSet::WEBHOOKS)
        .union(FeatureSet::TEAM_COLLABORATION)
        .union(FeatureSet::AUDIT_LOGS)
}

const fn business_features() -> FeatureSet {
    professional_features()
        .union(FeatureSet::PRIORITY_EXECUTION)
        .union(FeatureSet::CUSTOM_INTEGRATIONS)
        .union(FeatureSet::SSO)
}
