use crate::constants::ANNUAL_MONTHS_BILLED;
use crate::marketplace::Contacts;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration of the `autho` tooling.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub catalog: CatalogConfig,
    pub document: DocumentConfig,
    pub lint: LintConfig,
    pub logging: LoggingConfig,
    pub contacts: Contacts,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where plans come from. `None` means the built-in catalog.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

/// The pricing sheet checked by `autho check`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub path: PathBuf,
}

/// Consistency rule settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Annual price must equal this many monthly payments.
    pub annual_multiplier: u32,
    /// Treat warnings as failures.
    pub deny_warnings: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub directory: Option<PathBuf>,
}

// --- Default ---

impl Default for DocumentConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("PRICING.md") }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self { annual_multiplier: ANNUAL_MONTHS_BILLED, deny_warnings: false }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), json: false, directory: None }
    }
}
