use autho::domain::Tier;
use autho::domain::config::AppConfig;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn builtin_catalog_without_a_path() {
    let catalog = autho::open_catalog(&AppConfig::default(), None).unwrap();
    assert_eq!(catalog.len(), 5);
    assert!(autho::lint_catalog(&AppConfig::default(), &catalog).is_clean());
}

#[test]
fn explicit_path_beats_config() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("catalog.json");
    let trimmed = autho::catalog::Catalog::new(
        autho::catalog::builtin_plans().into_iter().filter(|p| p.tier <= Tier::Starter).collect(),
    )
    .unwrap();
    fs::write(&file, trimmed.to_json_string().unwrap()).unwrap();

    let mut config = AppConfig::default();
    config.catalog.path = Some(dir.path().join("missing.toml"));
    assert!(autho::open_catalog(&config, None).is_err());

    let catalog = autho::open_catalog(&config, Some(&file)).unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn rendered_document_checks_clean() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("PRICING.md");
    let config = AppConfig::default();
    let catalog = autho::open_catalog(&config, None).unwrap();
    fs::write(&path, autho::document::render(&catalog, &config.contacts)).unwrap();

    let report = autho::check_document(&config, &catalog, &path).unwrap();
    assert!(report.is_clean(), "{report}");
    assert!(autho::check_document(&config, &catalog, Path::new("nope/PRICING.md")).is_err());
}

#[test]
fn feature_registry() {
    assert!(autho::features::is_enabled("catalog"));
    assert!(autho::features::is_enabled("document"));
    assert!(!autho::features::is_enabled("billing"));
}
