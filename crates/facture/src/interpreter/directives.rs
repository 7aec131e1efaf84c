//! Directive appliers.
//!
//! Each directive is a pure function from a value to a new string. Case
//! conversion is ASCII only; widths are counted in characters.

use thiserror::Error;

use crate::parser::{Case, Directive};
use crate::types::Value;

/// A directive that does not accept the value it was given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("precision only applies to numbers")]
    PrecisionOnText,
}

/// Apply `directive` to `value`.
///
/// Numbers are rendered with `default_precision` decimals before any
/// directive other than `precision` sees them.
pub fn apply_directive(
    directive: Directive,
    value: &Value,
    default_precision: usize,
) -> Result<String, DirectiveError> {
    match directive {
        Directive::Precision(digits) => match value {
            Value::Number(n) => Ok(with_precision(*n, digits)),
            Value::Text(_) => Err(DirectiveError::PrecisionOnText),
        },
        Directive::Case(case) => Ok(change_case(&value.render(default_precision), case)),
        Directive::Min(width) => Ok(pad_to(&value.render(default_precision), width)),
        Directive::Max(width) => Ok(truncate_to(&value.render(default_precision), width)),
    }
}

pub fn change_case(text: &str, case: Case) -> String {
    match case {
        Case::Upper => text.to_ascii_uppercase(),
        Case::Lower => text.to_ascii_lowercase(),
    }
}

/// Right-pad with spaces up to `width` characters. Never truncates.
pub fn pad_to(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

/// Keep the first `width` characters. Never pads.
pub fn truncate_to(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

pub fn with_precision(number: f64, digits: usize) -> String {
    format!("{number:.digits$}")
}
