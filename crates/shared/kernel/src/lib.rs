//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it owns configuration loading and re-exports the domain.
//!
//! ## Config loading
//! ```rust,no_run
//! use autho_kernel::config::ConfigLoader;
//! use autho_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = ConfigLoader::new().file("autho.toml").load().unwrap();
//! println!("{}", cfg.document.path.display());
//! ```
pub mod config;

pub use autho_domain as domain;
