use autho_domain::DomainParseError;
use std::borrow::Cow;

/// Errors raised while reading a pricing document or extracting its typed views.
#[autho_derive::autho_error]
pub enum DocumentError {
    #[error("Document I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// A cell or field holds a value the domain types reject.
    #[error("Invalid value{}: {source}", format_context(.context))]
    Parse { source: DomainParseError, context: Option<Cow<'static, str>> },

    #[error("Missing section{}: {message}", format_context(.context))]
    MissingSection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Missing table{}: {message}", format_context(.context))]
    MissingTable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A column, table row or `**Label:**` field is absent.
    #[error("Missing entry{}: {message}", format_context(.context))]
    MissingEntry { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A cell is present but malformed in a way no domain parser covers.
    #[error("Invalid cell{}: {message}", format_context(.context))]
    InvalidCell { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
