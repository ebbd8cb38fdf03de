use thiserror::Error;

/// Failure to parse one of the domain value types from text.
///
/// The domain crate stays free of the workspace error macro; feature crates wrap this
/// error into their own enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainParseError {
    #[error("unknown tier '{0}'")]
    UnknownTier(String),

    #[error("unknown module '{0}'")]
    UnknownModule(String),

    #[error("unknown feature '{0}'")]
    UnknownFeature(String),

    #[error("unknown support level '{0}'")]
    UnknownSupportLevel(String),

    #[error("invalid price '{0}'")]
    InvalidPrice(String),

    #[error("invalid quota '{0}'")]
    InvalidQuota(String),
}
