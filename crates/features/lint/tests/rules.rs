use autho_catalog::{Catalog, builtin_plans};
use autho_domain::{FeatureSet, ModuleSet, Plan, Price, Quota, SupportLevel, Tier};
use autho_lint::{LintOptions, LintReport, Linter, Severity, lint};

fn lint_with(edit: impl FnOnce(&mut Vec<Plan>)) -> LintReport {
    let mut plans = builtin_plans();
    edit(&mut plans);
    let catalog = Catalog::new(plans).unwrap();
    lint(&catalog, LintOptions::default())
}

fn plan(plans: &mut [Plan], tier: Tier) -> &mut Plan {
    plans.iter_mut().find(|p| p.tier == tier).unwrap()
}

fn rules_fired(report: &LintReport) -> Vec<&'static str> {
    report.findings.iter().map(|f| f.rule).collect()
}

#[test]
fn builtin_catalog_is_clean() {
    let report = lint(&Catalog::builtin(), LintOptions::default());
    assert!(report.is_clean(), "{report}");
}

#[test]
fn default_rules_are_all_registered() {
    let ids: Vec<_> = Linter::default_rules(LintOptions::default()).rules().map(|r| r.id()).collect();
    assert_eq!(
        ids,
        [
            "tier-coverage",
            "module-monotonic",
            "feature-monotonic",
            "quota-monotonic",
            "support-monotonic",
            "price-monotonic",
            "annual-pricing",
            "sku-format",
            "popular-plan",
        ]
    );
}

#[test]
fn missing_tier_is_reported() {
    let report = lint_with(|plans| plans.retain(|p| p.tier != Tier::Business));
    assert_eq!(rules_fired(&report), ["tier-coverage"]);
    assert_eq!(report.findings[0].tier, Some(Tier::Business));
}

#[test]
fn dropping_a_module_breaks_monotonicity() {
    let report = lint_with(|plans| {
        plan(plans, Tier::Business).modules.remove(ModuleSet::EMAIL);
    });
    // Enterprise still has every module, so only the Professional -> Business step fails.
    assert_eq!(rules_fired(&report), ["module-monotonic"]);
    assert_eq!(report.findings[0].tier, Some(Tier::Business));
    assert_eq!(report.findings[0].message, "drops modules available in Professional: email");
}

#[test]
fn dropping_a_feature_breaks_monotonicity() {
    let report = lint_with(|plans| {
        plan(plans, Tier::Enterprise).features.remove(FeatureSet::SSO);
    });
    assert_eq!(rules_fired(&report), ["feature-monotonic"]);
    assert!(report.findings[0].message.contains("SSO"));
}

#[test]
fn shrinking_quotas_are_errors() {
    let report = lint_with(|plans| {
        let enterprise = plan(plans, Tier::Enterprise);
        enterprise.limits.tasks_per_month = Quota::Limited(10);
        enterprise.limits.max_file_size_mb = 1;
    });
    assert_eq!(rules_fired(&report), ["quota-monotonic", "quota-monotonic"]);
    assert!(report.findings.iter().all(|f| f.severity == Severity::Error));
    assert_eq!(report.findings[0].message, "tasks per month 10 is below Business (50,000)");
}

#[test]
fn weaker_support_is_only_a_warning() {
    let report = lint_with(|plans| {
        plan(plans, Tier::Enterprise).limits.support = SupportLevel::Email;
    });
    assert_eq!(rules_fired(&report), ["support-monotonic"]);
    assert!(!report.has_errors());
    assert!(report.fails(true));
}

#[test]
fn flat_prices_are_errors() {
    let report = lint_with(|plans| {
        let starter = plan(plans, Tier::Starter);
        starter.monthly = Price::from_dollars(79);
        starter.annual = Price::from_dollars(790);
    });
    assert_eq!(rules_fired(&report), ["price-monotonic"]);
    assert_eq!(report.findings[0].tier, Some(Tier::Professional));
}

#[test]
fn annual_price_must_be_ten_months() {
    let report = lint_with(|plans| {
        plan(plans, Tier::Business).annual = Price::from_dollars(1_999);
    });
    assert_eq!(rules_fired(&report), ["annual-pricing"]);
    assert_eq!(report.findings[0].message, "annual $1,999 should be 10 x $199 = $1,990");
}

#[test]
fn multiplier_is_configurable() {
    let report = lint(&Catalog::builtin(), LintOptions { annual_multiplier: 12 });
    // Free stays $0 either way; the four paid tiers are off.
    assert_eq!(report.by_rule("annual-pricing").count(), 4);
}

#[test]
fn free_tier_must_cost_nothing() {
    let report = lint_with(|plans| {
        let free = plan(plans, Tier::Free);
        free.monthly = Price::from_dollars(1);
        free.annual = Price::from_dollars(10);
    });
    let annual: Vec<_> = report.by_rule("annual-pricing").collect();
    assert_eq!(annual.len(), 1);
    assert_eq!(annual[0].tier, Some(Tier::Free));
}

#[test]
fn sku_must_follow_the_tier_name() {
    let report = lint_with(|plans| {
        plan(plans, Tier::Starter).sku = "author-basic".to_owned();
    });
    assert_eq!(rules_fired(&report), ["sku-format"]);
    assert_eq!(report.findings[0].message, "SKU `author-basic` should be `author-starter`");
}

#[test]
fn popular_badge_must_be_unique() {
    let none = lint_with(|plans| plans.iter_mut().for_each(|p| p.popular = false));
    assert_eq!(rules_fired(&none), ["popular-plan"]);

    let two = lint_with(|plans| plan(plans, Tier::Business).popular = true);
    assert_eq!(two.findings[0].message, "2 plans are marked popular: Professional, Business");
    assert_eq!(two.findings[0].severity, Severity::Warning);
}

#[test]
fn report_serializes_for_machines() {
    let report = lint_with(|plans| plan(plans, Tier::Starter).sku = "x".to_owned());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["findings"][0]["rule"], "sku-format");
    assert_eq!(json["findings"][0]["severity"], "error");
    assert_eq!(json["findings"][0]["tier"], "starter");
}
