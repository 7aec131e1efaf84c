//! Placeholder scanner.
//!
//! Splits a template into literal spans and `%`-delimited placeholder spans.
//! The scanner is a plain iterator: it is lazy, finite, and stops after the
//! first error.

use super::ast::Span;
use super::error::ParseError;

const DELIMITER: char = '%';

/// A raw piece of a template, before placeholder contents are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawSegment {
    /// Verbatim text.
    Literal(Span),
    /// A `%%` escape, standing for one literal `%`. The span covers both characters.
    Escape(Span),
    /// The text between two `%` delimiters, delimiters excluded.
    Placeholder(Span),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Accumulating literal text.
    Copying,
    /// Positioned on an opening `%`.
    Substituting,
    /// End of input reached, or an error was reported.
    Done,
}

/// Iterator over the [`RawSegment`]s of a template.
///
/// ```
/// use facture::parser::{RawSegment, Scanner, Span};
///
/// let segments: Vec<_> = Scanner::new("Total: %total%%%")
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(
///     segments,
///     vec![
///         RawSegment::Literal(Span::new(0, 7)),
///         RawSegment::Placeholder(Span::new(8, 5)),
///         RawSegment::Escape(Span::new(14, 2)),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    state: State,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            state: State::Copying,
        }
    }

    fn copy_literal(&mut self) -> Option<RawSegment> {
        let rest = &self.source[self.pos..];
        if rest.is_empty() {
            self.state = State::Done;
            return None;
        }
        let len = match rest.find(DELIMITER) {
            Some(len) => {
                self.state = State::Substituting;
                len
            }
            None => {
                self.state = State::Done;
                rest.len()
            }
        };
        if len == 0 {
            return None;
        }
        let span = Span::new(self.pos, len);
        self.pos += len;
        Some(RawSegment::Literal(span))
    }

    fn substitute(&mut self) -> Result<RawSegment, ParseError> {
        let open = self.pos;
        let body_start = open + DELIMITER.len_utf8();
        let Some(body_len) = self.source[body_start..].find(DELIMITER) else {
            self.state = State::Done;
            return Err(ParseError::unterminated(
                self.source,
                Span::new(open, self.source.len() - open),
            ));
        };
        self.pos = body_start + body_len + DELIMITER.len_utf8();
        self.state = State::Copying;
        if body_len == 0 {
            Ok(RawSegment::Escape(Span::new(open, self.pos - open)))
        } else {
            Ok(RawSegment::Placeholder(Span::new(body_start, body_len)))
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<RawSegment, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Copying => {
                    if let Some(segment) = self.copy_literal() {
                        return Some(Ok(segment));
                    }
                }
                State::Substituting => return Some(self.substitute()),
                State::Done => return None,
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
