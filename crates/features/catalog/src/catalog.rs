use crate::builtin::builtin_plans;
use crate::error::{CatalogError, CatalogErrorExt};
use autho_domain::constants::IBM_CATALOG_ID;
use autho_domain::{ListingKind, Marketplace, MarketplaceListing, Plan, Tier};
use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// On-disk shape of a catalog file (TOML or JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default = "default_ibm_catalog_id")]
    pub ibm_catalog_id: String,
    pub plans: Vec<Plan>,
}

fn default_ibm_catalog_id() -> String {
    IBM_CATALOG_ID.to_owned()
}

/// Supported catalog file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Picks the format from a file extension.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnsupportedFormat`] for anything but `.toml` / `.json`.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            other => Err(CatalogError::UnsupportedFormat {
                message: format!("extension {other:?} (expected .toml or .json)").into(),
                context: Some(path.display().to_string().into()),
            }),
        }
    }
}

/// An ordered, validated set of plans.
///
/// Plans are kept in tier order; tiers and SKUs are unique. Internal consistency beyond
/// that (monotonic limits, price arithmetic) is the job of the lint rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    plans: Vec<Plan>,
    ibm_catalog_id: String,
}

impl Catalog {
    /// Builds a catalog from plans in any order.
    ///
    /// # Errors
    /// * [`CatalogError::Empty`] when `plans` is empty.
    /// * [`CatalogError::DuplicateTier`] / [`CatalogError::DuplicateSku`] on collisions.
    pub fn new(mut plans: Vec<Plan>) -> Result<Self, CatalogError> {
        if plans.is_empty() {
            return Err(CatalogError::Empty {
                message: "a catalog needs at least one plan".into(),
                context: None,
            });
        }

        let mut tiers = FxHashSet::default();
        let mut skus = FxHashSet::default();
        for plan in &plans {
            if !tiers.insert(plan.tier) {
                return Err(CatalogError::DuplicateTier { tier: plan.tier, context: None });
            }
            if !skus.insert(plan.sku.as_str()) {
                return Err(CatalogError::DuplicateSku {
                    sku: plan.sku.clone().into(),
                    context: Some(format!("{} plan", plan.tier).into()),
                });
            }
        }

        plans.sort_by_key(|plan| plan.tier);
        Self { plans, ibm_catalog_id: String::new() }.with_ibm_catalog_id(default_ibm_catalog_id())
    }

    /// The published price list.
    #[must_use]
    pub fn builtin() -> Self {
        Self { plans: builtin_plans(), ibm_catalog_id: default_ibm_catalog_id() }
    }

    /// Overrides the IBM Cloud catalog identifier.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateSku`] when a plan already uses `id` as its SKU.
    pub fn with_ibm_catalog_id(mut self, id: impl Into<String>) -> Result<Self, CatalogError> {
        let id = id.into();
        if let Some(plan) = self.plans.iter().find(|plan| plan.sku == id) {
            return Err(CatalogError::DuplicateSku {
                sku: id.into(),
                context: Some(format!("{} plan and the IBM Cloud catalog ID", plan.tier).into()),
            });
        }
        self.ibm_catalog_id = id;
        Ok(self)
    }

    /// Plans in tier order.
    #[must_use]
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Tiers present, in order.
    pub fn tiers(&self) -> impl Iterator<Item = Tier> + '_ {
        self.plans.iter().map(|plan| plan.tier)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    #[must_use]
    pub fn plan(&self, tier: Tier) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.tier == tier)
    }

    /// Looks a plan up by tier wire name or display name, case-insensitively.
    #[must_use]
    pub fn plan_by_name(&self, name: &str) -> Option<&Plan> {
        let needle = name.trim();
        self.plans.iter().find(|plan| {
            plan.name.eq_ignore_ascii_case(needle) || plan.tier.wire_name().eq_ignore_ascii_case(needle)
        })
    }

    /// Resolves an Azure Marketplace SKU. Matching is exact.
    #[must_use]
    pub fn plan_by_sku(&self, sku: &str) -> Option<&Plan> {
        let found = self.plans.iter().find(|plan| plan.sku == sku);
        debug!(sku, found = found.is_some(), "SKU lookup");
        found
    }

    /// Pairs of neighbouring plans, lower tier first.
    pub fn adjacent(&self) -> impl Iterator<Item = (&Plan, &Plan)> + '_ {
        self.plans.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    #[must_use]
    pub fn ibm_catalog_id(&self) -> &str {
        &self.ibm_catalog_id
    }

    /// Every marketplace identifier: one Azure SKU per plan, then the IBM catalog entry.
    #[must_use]
    pub fn listings(&self) -> Vec<MarketplaceListing> {
        self.plans
            .iter()
            .map(|plan| MarketplaceListing {
                marketplace: Marketplace::Azure,
                id: plan.sku.clone(),
                kind: ListingKind::Tier(plan.tier),
            })
            .chain(std::iter::once(MarketplaceListing {
                marketplace: Marketplace::IbmCloud,
                id: self.ibm_catalog_id.clone(),
                kind: ListingKind::Catalog,
            }))
            .collect()
    }

    // --- Files ---

    /// # Errors
    /// Fails on malformed TOML or an invalid plan set.
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw).context("Parsing TOML catalog")?;
        Self::from_file(file)
    }

    /// # Errors
    /// Fails on malformed JSON or an invalid plan set.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw).context("Parsing JSON catalog")?;
        Self::from_file(file)
    }

    /// # Errors
    /// Fails on an invalid plan set.
    pub fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        Self::new(file.plans)?.with_ibm_catalog_id(file.ibm_catalog_id)
    }

    /// Reads a catalog file, choosing the format from its extension.
    ///
    /// # Errors
    /// Fails on unsupported extensions, I/O errors, malformed content or an invalid plan set.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let raw = fs::read_to_string(path)
            .context(format!("Reading catalog {}", path.display()))?;

        let catalog = match format {
            CatalogFormat::Toml => Self::from_toml_str(&raw),
            CatalogFormat::Json => Self::from_json_str(&raw),
        }?;

        info!(plans = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    #[must_use]
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile { ibm_catalog_id: self.ibm_catalog_id.clone(), plans: self.plans.clone() }
    }

    /// # Errors
    /// Returns [`CatalogError::TomlEncode`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        toml::to_string_pretty(&self.to_file()).context("Encoding TOML catalog")
    }

    /// # Errors
    /// Returns [`CatalogError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(&self.to_file()).context("Encoding JSON catalog")
    }

    /// Encodes in the given format.
    ///
    /// # Errors
    /// See [`Catalog::to_toml_string`] and [`Catalog::to_json_string`].
    pub fn encode(&self, format: CatalogFormat) -> Result<String, CatalogError> {
        match format {
            CatalogFormat::Toml => self.to_toml_string(),
            CatalogFormat::Json => self.to_json_string(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Plan;
    type IntoIter = std::slice::Iter<'a, Plan>;

    fn into_iter(self) -> Self::IntoIter {
        self.plans.iter()
    }
}
