use autho_domain::config::{AppConfig, DocumentConfig, LintConfig, LoggingConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let document = DocumentConfig::default();
    assert_eq!(document.path, std::path::PathBuf::from("PRICING.md"));

    let lint = LintConfig::default();
    assert_eq!(lint.annual_multiplier, 10);
    assert!(!lint.deny_warnings);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "warn");
    assert!(logging.directory.is_none());

    let cfg = AppConfig::default();
    assert!(cfg.catalog.path.is_none());
    assert_eq!(cfg.contacts.support, "support@avidsolutions.com");
}

#[test]
fn app_config_deserializes_partial_sections() {
    let raw = json!({
        "catalog": { "path": "plans/catalog.toml" },
        "lint": { "deny_warnings": true },
        "contacts": { "repository": "https://example.invalid/autho" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.catalog.path.as_deref(), Some(std::path::Path::new("plans/catalog.toml")));
    assert!(cfg.lint.deny_warnings);
    assert_eq!(cfg.lint.annual_multiplier, 10);
    assert_eq!(cfg.contacts.sales, "sales@avidsolutions.com");
    assert_eq!(cfg.contacts.repository.as_deref(), Some("https://example.invalid/autho"));
}

#[test]
fn config_is_cheap_to_clone_and_copy_on_write() {
    let base = AppConfig::default();
    let mut tweaked = base.clone();
    tweaked.lint.annual_multiplier = 12;

    assert_eq!(base.lint.annual_multiplier, 10);
    assert_eq!(tweaked.lint.annual_multiplier, 12);
}
