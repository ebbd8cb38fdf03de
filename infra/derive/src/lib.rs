#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared across the workspace. Currently this is the error
//! enum attribute used by every library crate.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! autho-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * Derives `Debug` and `thiserror::Error` and injects a private `format_context` helper
///   for the `#[error(..)]` strings.
/// * Generates a companion `...Ext` trait whose `.context()` works on results of this error
///   and of every wrapped source error.
/// * Adds `context_hint()` and `with_context()` to the enum.
/// * Implements `From<T>` for each variant with a `source: T` field, so `?` converts upstream
///   errors.
///
/// # Requirements
///
/// Every variant is a struct variant with a `context: Option<Cow<'static, str>>` field. At most
/// one variant may wrap a given source type. Anything else is a compile error.
///
/// # Example
///
/// ```rust,ignore
/// use autho_derive::autho_error;
/// use std::borrow::Cow;
///
/// #[autho_error]
/// pub enum CatalogError {
///     #[error("TOML error{}: {source}", format_context(.context))]
///     Toml { source: toml::de::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Empty catalog{}: {message}", format_context(.context))]
///     Empty { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(raw: &str) -> Result<Catalog, CatalogError> {
///     let file: CatalogFile = toml::from_str(raw).context("Parsing catalog file")?;
///     Catalog::new(file.plans)
/// }
/// ```
#[proc_macro_attribute]
pub fn autho_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
