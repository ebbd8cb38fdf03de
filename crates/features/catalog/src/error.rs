use autho_domain::Tier;
use std::borrow::Cow;

/// Errors raised while building or loading a catalog.
#[autho_derive::autho_error]
pub enum CatalogError {
    #[error("Catalog I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Catalog TOML parse error{}: {source}", format_context(.context))]
    TomlDecode { source: toml::de::Error, context: Option<Cow<'static, str>> },

    #[error("Catalog TOML encode error{}: {source}", format_context(.context))]
    TomlEncode { source: toml::ser::Error, context: Option<Cow<'static, str>> },

    #[error("Catalog JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Two plans claim the same tier.
    #[error("Duplicate tier{}: {tier}", format_context(.context))]
    DuplicateTier { tier: Tier, context: Option<Cow<'static, str>> },

    /// Two plans share a marketplace SKU.
    #[error("Duplicate SKU{}: {sku}", format_context(.context))]
    DuplicateSku { sku: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The catalog has no plans at all.
    #[error("Empty catalog{}: {message}", format_context(.context))]
    Empty { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The file extension does not name a supported format.
    #[error("Unsupported catalog format{}: {message}", format_context(.context))]
    UnsupportedFormat { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
