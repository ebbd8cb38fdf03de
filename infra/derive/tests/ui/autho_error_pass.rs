use autho_derive::autho_error;
use std::borrow::Cow;

#[autho_error]
pub enum ParseError {
    #[error("Integer parse error{}: {source}", format_context(.context))]
    Int {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid quota{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<std::borrow::Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, ParseError> {
    let value = raw.parse::<u32>().context("reading quota")?;
    if value == 0 {
        return Err(ParseError::Invalid { message: "zero".into(), context: None }).context("tasks");
    }
    Ok(value)
}

fn read(path: &str) -> Result<String, ParseError> {
    Ok(std::fs::read_to_string(path)?)
}

fn main() {
    let _ = parse("10");
    let _ = read("quota.txt").map_err(|e| e.context_hint().map(str::to_owned));
}
