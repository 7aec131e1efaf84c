//! Parse error types for templates.

use thiserror::Error;

use super::ast::Span;

/// An error that occurred while parsing a template.
///
/// Both variants describe a malformed placeholder. They carry a 1-based
/// line and column for messages, and the byte span for diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A `%` with no closing `%` before the end of the template.
    #[error("unterminated placeholder at {line}:{column}")]
    UnterminatedPlaceholder {
        line: usize,
        column: usize,
        span: Span,
    },

    /// A placeholder whose content does not follow the placeholder grammar.
    #[error("malformed placeholder at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        span: Span,
        message: String,
    },
}

impl ParseError {
    pub(crate) fn unterminated(source: &str, span: Span) -> Self {
        let (line, column) = line_column(source, span.start);
        ParseError::UnterminatedPlaceholder { line, column, span }
    }

    pub(crate) fn syntax(source: &str, span: Span, message: impl Into<String>) -> Self {
        let (line, column) = line_column(source, span.start);
        ParseError::Syntax {
            line,
            column,
            span,
            message: message.into(),
        }
    }

    /// The byte range the error points at.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnterminatedPlaceholder { span, .. } | ParseError::Syntax { span, .. } => {
                *span
            }
        }
    }

    /// The 1-based line and column the error points at.
    pub fn line_column(&self) -> (usize, usize) {
        match self {
            ParseError::UnterminatedPlaceholder { line, column, .. }
            | ParseError::Syntax { line, column, .. } => (*line, *column),
        }
    }

    /// The bare message, without location prefix.
    pub fn message(&self) -> String {
        match self {
            ParseError::UnterminatedPlaceholder { .. } => "unterminated placeholder".to_string(),
            ParseError::Syntax { message, .. } => message.clone(),
        }
    }
}

/// Calculate a 1-based line and column (in characters) for a byte offset.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let consumed = &source[..offset.min(source.len())];
    let line = consumed.chars().filter(|&c| c == '\n').count() + 1;
    let line_start = consumed.rfind('\n').map_or(0, |pos| pos + 1);
    let column = consumed[line_start..].chars().count() + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_column_counts_characters_after_last_newline() {
        assert_eq!(line_column("abc", 0), (1, 1));
        assert_eq!(line_column("abc", 2), (1, 3));
        assert_eq!(line_column("ab\ncd", 4), (2, 2));
        assert_eq!(line_column("é%", 2), (1, 2));
    }
}
