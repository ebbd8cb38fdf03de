use autho_kernel::config::{ConfigError, ConfigLoader};
use autho_kernel::domain::config::AppConfig;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> config::Map<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn file_values_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("autho.toml");
    fs::write(
        &path,
        r#"
[document]
path = "docs/PRICING.md"

[lint]
annual_multiplier = 12
"#,
    )?;

    let cfg: AppConfig = ConfigLoader::new().file(&path).env_source(env(&[])).load()?;
    assert_eq!(cfg.document.path, std::path::PathBuf::from("docs/PRICING.md"));
    assert_eq!(cfg.lint.annual_multiplier, 12);
    assert!(!cfg.lint.deny_warnings);
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("autho.toml");
    fs::write(&path, "[lint]\nannual_multiplier = 12\n")?;

    let cfg: AppConfig = ConfigLoader::new()
        .file(&path)
        .env_source(env(&[
            ("AUTHO__LINT__ANNUAL_MULTIPLIER", "11"),
            ("AUTHO__LINT__DENY_WARNINGS", "true"),
            ("UNRELATED", "ignored"),
        ]))
        .load()?;

    assert_eq!(cfg.lint.annual_multiplier, 11);
    assert!(cfg.lint.deny_warnings);
    Ok(())
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = ConfigLoader::new()
        .file("definitely/not/here.toml")
        .env_source(env(&[]))
        .load::<AppConfig>()
        .unwrap_err();

    assert!(matches!(err, ConfigError::NotFound { .. }));
    assert_eq!(err.context_hint(), Some("Explicit config file"));
}

#[test]
fn malformed_values_surface_config_errors() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[lint]\nannual_multiplier = \"often\"\n")?;

    let err = ConfigLoader::new().file(&path).env_source(env(&[])).load::<AppConfig>().unwrap_err();
    assert!(matches!(err, ConfigError::Config { .. }));
    Ok(())
}
