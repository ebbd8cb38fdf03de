use autho_derive::autho_error;
use std::borrow::Cow;

#[autho_error]
pub enum QuotaError {
    #[error("Integer parse error{}: {source}", format_context(.context))]
    Int { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Out of range{}: {message}", format_context(.context))]
    OutOfRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_quota(raw: &str) -> Result<u64, QuotaError> {
    let value = raw.trim().parse::<u64>().context("parsing tasks per month")?;
    if value == 0 {
        return Err(QuotaError::OutOfRange { message: "quota must be positive".into(), context: None });
    }
    Ok(value)
}

#[test]
fn autho_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/autho_error_pass.rs");
}

#[test]
fn source_errors_carry_context() {
    let err = parse_quota("ten").unwrap_err();
    assert!(matches!(err, QuotaError::Int { .. }));
    assert_eq!(err.context_hint(), Some("parsing tasks per month"));
    assert!(err.to_string().starts_with("Integer parse error (parsing tasks per month): "));
}

#[test]
fn context_can_be_attached_after_the_fact() {
    let err = parse_quota("0").context("starter tier").unwrap_err();
    assert_eq!(err.context_hint(), Some("starter tier"));
    assert_eq!(err.to_string(), "Out of range (starter tier): quota must be positive");
}

#[test]
fn with_context_replaces_earlier_context() {
    let err = QuotaError::OutOfRange { message: "quota must be positive".into(), context: Some("first".into()) };
    let err = err.with_context("second");

    assert_eq!(err.context_hint(), Some("second"));
    assert_eq!(err.to_string(), "Out of range (second): quota must be positive");
}

#[test]
fn from_impl_enables_question_mark() {
    fn inner(raw: &str) -> Result<u64, QuotaError> {
        Ok(raw.parse::<u64>()?)
    }

    let err = inner("x").unwrap_err();
    assert!(matches!(err, QuotaError::Int { .. }));
    assert!(err.context_hint().is_none());
    assert_eq!(inner("42").unwrap(), 42);
}
