//! Error types for template rendering.

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;

/// The two recoverable failure classes of a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A placeholder names a symbol the dictionary does not define.
    MissingSymbol,
    /// A placeholder is unterminated, ill-formed, or carries a directive
    /// that cannot apply to its value.
    MalformedPlaceholder,
}

/// An error that occurred while rendering a template.
///
/// A failed render never yields partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Symbol not found in the dictionary.
    #[error("symbol not found: '{name}'{}", did_you_mean(.suggestions))]
    MissingSymbol {
        name: String,
        suggestions: Vec<String>,
    },

    /// A well-formed directive that cannot be applied to the value it receives.
    #[error("cannot apply '{directive}' to '{name}': {message}")]
    InvalidDirective {
        directive: String,
        name: String,
        message: String,
    },

    /// The template itself failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl RenderError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RenderError::MissingSymbol { .. } => ErrorKind::MissingSymbol,
            RenderError::InvalidDirective { .. } | RenderError::Parse(_) => {
                ErrorKind::MalformedPlaceholder
            }
        }
    }
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Find names close to `target`, closest first.
///
/// Comparison ignores ASCII case, like dictionary lookups. Short names (up to
/// three characters) accept one edit, longer names two. At most `limit`
/// names are returned.
pub fn compute_suggestions<'a>(
    target: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    limit: usize,
) -> Vec<String> {
    let target = target.to_ascii_lowercase();
    let max_distance = if target.len() <= 3 { 1 } else { 2 };

    let mut scored: Vec<(usize, &str)> = candidates
        .into_iter()
        .map(|candidate| (levenshtein(&target, &candidate.to_ascii_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);

    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}
