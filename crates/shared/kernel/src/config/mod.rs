use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name probed (with any supported extension) when no explicit file is given.
pub const DEFAULT_CONFIG_NAME: &str = "autho";

/// Prefix of environment overrides, e.g. `AUTHO__LINT__DENY_WARNINGS=true`.
pub const ENV_PREFIX: &str = "AUTHO";

const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[autho_derive::autho_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Config file not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layering, lowest precedence first:
/// 1. **Defaults**: whatever `T`'s `#[serde(default)]` provides.
/// 2. **File**: an explicit file (must exist) or the optional `autho.{toml,yaml,json}` in the
///    working directory.
/// 3. **Environment**: variables prefixed with `AUTHO__`; nested keys use `__`
///    (`AUTHO__DOCUMENT__PATH` maps to `document.path`).
#[derive(Debug, Default)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env_source: Option<Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an explicit config file. The file must exist.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Uses an optional explicit config file; `None` keeps the default probe.
    #[must_use]
    pub fn maybe_file(self, path: Option<impl AsRef<Path>>) -> Self {
        match path {
            Some(p) => self.file(p),
            None => self,
        }
    }

    /// Replaces the process environment with a fixed map (keys are full variable names).
    #[must_use]
    pub fn env_source(mut self, vars: Map<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// Builds and deserializes the layered configuration.
    ///
    /// # Errors
    /// * [`ConfigError::NotFound`] if an explicit file does not exist.
    /// * [`ConfigError::Config`] if a source is malformed or does not match `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let mut builder = Config::builder();

        match &self.file {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound {
                        message: path.display().to_string().into(),
                        context: Some("Explicit config file".into()),
                    });
                }
                info!("Loading config from {}", path.display());
                builder = builder.add_source(File::from(path.as_path()).required(true));
            },
            None => {
                debug!("Probing optional config '{DEFAULT_CONFIG_NAME}'");
                builder = builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false));
            },
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(self.env_source),
        );

        let config = builder
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")?;

        Ok(config)
    }
}
