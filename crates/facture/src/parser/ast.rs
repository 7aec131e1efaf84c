//! Public AST types for templates and placeholders.
//!
//! These types are public so tooling (the CLI `inspect` and `check`
//! commands, editors) can work with parsed templates without rendering them.

use std::fmt;

/// A byte range within a template string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Offset one past the last byte.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The text this span covers in `source`.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end()]
    }
}

/// A parsed template: literal text interleaved with placeholders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Iterate over the placeholders of this template in order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(p),
            Segment::Literal(_) => None,
        })
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, with `%%` escapes already folded to `%`.
    Literal(String),
    /// A `%name{directives}%` substitution.
    Placeholder(Placeholder),
}

/// A placeholder: a symbol name plus up to two directives.
///
/// `directive` is applied to the symbol's value. `chained` is applied
/// afterwards to the whole output rendered so far, not to the symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub name: String,
    pub directive: Option<Directive>,
    pub chained: Option<Directive>,
    /// Location of the placeholder in the template, `%` delimiters included.
    pub span: Span,
}

/// A formatting directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `case=<letter>`: the case of the letter selects the conversion.
    Case(Case),
    /// `min=<n>`: pad on the right with spaces to at least `n` characters.
    Min(usize),
    /// `max=<n>`: truncate to at most `n` characters.
    Max(usize),
    /// `precision=<n>`: render a number with exactly `n` decimals.
    Precision(usize),
}

/// Direction of a `case` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Upper,
    Lower,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Case(Case::Upper) => write!(f, "case=A"),
            Directive::Case(Case::Lower) => write!(f, "case=a"),
            Directive::Min(n) => write!(f, "min={n}"),
            Directive::Max(n) => write!(f, "max={n}"),
            Directive::Precision(n) => write!(f, "precision={n}"),
        }
    }
}
