//! Miette diagnostic wrapper for template parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use facture::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for malformed placeholders.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("malformed placeholder: {message}")]
#[diagnostic(code(facture::syntax))]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TemplateDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(name: &str, content: &str, err: &ParseError) -> Self {
        let span = err.span();

        // Clamp to content length to avoid miette panic on out-of-bounds
        let offset = span.start.min(content.len());
        let len = span.len.max(1).min(content.len() - offset);

        let help = match err {
            ParseError::UnterminatedPlaceholder { .. } => {
                Some("close the placeholder with '%', or write '%%' for a literal percent".into())
            }
            ParseError::Syntax { .. } => None,
        };

        TemplateDiagnostic {
            src: NamedSource::new(name, content.to_string()),
            span: (offset, len).into(),
            message: err.message(),
            help,
        }
    }
}
