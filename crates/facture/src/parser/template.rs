//! Template parser using winnow.
//!
//! Drives the [`Scanner`] across a template and parses each placeholder body:
//! - Plain substitutions: `%name%`
//! - Directive blocks: `%name{min=10}%`, `%name{min=10,case=A}%`
//! - The `%%` escape, folded into the surrounding literal text

use winnow::combinator::{cut_err, opt};
use winnow::error::{ContextError, ErrMode, StrContext};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

use super::ast::{Case, Directive, Placeholder, Segment, Span, Template};
use super::error::ParseError;
use super::scanner::{RawSegment, Scanner};

/// Placeholders carry at most a directive and one chained directive.
const MAX_DIRECTIVES: usize = 2;

/// Parse a template string into an AST.
///
/// Parsing stops at the first malformed placeholder; nothing of a template
/// with an error is ever rendered.
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut segments = Vec::new();
    for raw in Scanner::new(input) {
        let segment = match raw? {
            RawSegment::Literal(span) => Segment::Literal(span.slice(input).to_string()),
            RawSegment::Escape(_) => Segment::Literal("%".to_string()),
            RawSegment::Placeholder(body) => Segment::Placeholder(parse_placeholder(input, body)?),
        };
        segments.push(segment);
    }
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Escape literal text so that it renders back to itself.
///
/// ```
/// use facture::{Dictionary, parser::escape_literal};
///
/// let text = "VAT 20% included";
/// assert_eq!(escape_literal(text), "VAT 20%% included");
/// assert_eq!(Dictionary::new().render(&escape_literal(text)).unwrap(), text);
/// ```
pub fn escape_literal(text: &str) -> String {
    text.replace('%', "%%")
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// A directive as written, before its key and value are checked.
struct RawDirective<'i> {
    key: &'i str,
    value: &'i str,
    /// Offset of the key within the placeholder body.
    offset: usize,
    len: usize,
}

/// Parse the body of one placeholder (the text between the `%` delimiters).
fn parse_placeholder(source: &str, body: Span) -> Result<Placeholder, ParseError> {
    let text = body.slice(source);
    let mut remaining = text;
    let at = |rest: &str| body.start + (text.len() - rest.len());

    let (name, raw_directives) = match placeholder_body(&mut remaining) {
        Ok(parsed) => parsed,
        Err(e) => {
            let len = remaining.chars().next().map_or(1, char::len_utf8);
            return Err(ParseError::syntax(
                source,
                Span::new(at(remaining), len),
                describe(&e),
            ));
        }
    };

    if let Some(unexpected) = remaining.chars().next() {
        return Err(ParseError::syntax(
            source,
            Span::new(at(remaining), unexpected.len_utf8()),
            format!("unexpected character '{unexpected}'"),
        ));
    }

    let raw_directives = raw_directives.unwrap_or_default();
    if raw_directives.len() > MAX_DIRECTIVES {
        let extra = &raw_directives[MAX_DIRECTIVES];
        return Err(ParseError::syntax(
            source,
            Span::new(body.start + extra.offset, extra.len),
            format!("at most {MAX_DIRECTIVES} directives are allowed"),
        ));
    }

    let mut directives = raw_directives.iter().map(|raw| {
        directive(raw).map_err(|message| {
            ParseError::syntax(source, Span::new(body.start + raw.offset, raw.len), message)
        })
    });
    let directive = directives.next().transpose()?;
    let chained = directives.next().transpose()?;

    Ok(Placeholder {
        name: name.to_string(),
        directive,
        chained,
        span: Span::new(body.start - 1, body.len + 2),
    })
}

/// Parse `name` followed by an optional `{directive(,directive)*}` block.
fn placeholder_body<'i>(
    input: &mut &'i str,
) -> ModalResult<(&'i str, Option<Vec<RawDirective<'i>>>)> {
    let full_len = input.len();
    let name = symbol_name(input)?;
    if open_block(input)?.is_none() {
        return Ok((name, None));
    }

    let mut directives = Vec::new();
    loop {
        let offset = full_len - input.len();
        let (key, value) = raw_directive(input)?;
        let len = full_len - input.len() - offset;
        directives.push(RawDirective {
            key,
            value,
            offset,
            len,
        });
        if separator(input)?.is_none() {
            break;
        }
    }
    close_block(input)?;
    Ok((name, Some(directives)))
}

/// Parse a symbol name: everything up to the directive block.
fn symbol_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_till(1.., ['{', '}'])
        .context(StrContext::Label("a symbol name"))
        .parse_next(input)
}

fn open_block(input: &mut &str) -> ModalResult<Option<char>> {
    opt('{').parse_next(input)
}

fn separator(input: &mut &str) -> ModalResult<Option<char>> {
    opt(',').parse_next(input)
}

fn close_block(input: &mut &str) -> ModalResult<char> {
    cut_err('}')
        .context(StrContext::Label("'}' or ','"))
        .parse_next(input)
}

/// Parse `key=value` without interpreting either side.
fn raw_directive<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    (
        cut_err(take_while(1.., |c: char| c.is_ascii_alphabetic()))
            .context(StrContext::Label("a directive name")),
        cut_err('=').context(StrContext::Label("'=' after the directive name")),
        cut_err(take_while(1.., |c: char| c.is_ascii_alphanumeric()))
            .context(StrContext::Label("a directive value")),
    )
        .map(|(key, _, value)| (key, value))
        .parse_next(input)
}

/// Check a raw directive's key and value.
fn directive(raw: &RawDirective<'_>) -> Result<Directive, String> {
    let key = raw.key.to_ascii_lowercase();
    match key.as_str() {
        "case" => {
            let mut chars = raw.value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_uppercase() => Ok(Directive::Case(Case::Upper)),
                (Some(c), None) if c.is_ascii_lowercase() => Ok(Directive::Case(Case::Lower)),
                _ => Err(format!(
                    "'case' expects a single letter, got '{}'",
                    raw.value
                )),
            }
        }
        "min" => count(raw).map(Directive::Min),
        "max" => count(raw).map(Directive::Max),
        "precision" => count(raw).map(Directive::Precision),
        _ => Err(format!(
            "unknown directive '{}', expected one of: case, min, max, precision",
            raw.key
        )),
    }
}

fn count(raw: &RawDirective<'_>) -> Result<usize, String> {
    if !raw.value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!(
            "'{}' expects a number, got '{}'",
            raw.key.to_ascii_lowercase(),
            raw.value
        ));
    }
    raw.value.parse().map_err(|_| {
        format!(
            "'{}' value {} is out of range",
            raw.key.to_ascii_lowercase(),
            raw.value
        )
    })
}

/// Turn a winnow failure into a short message built from its innermost label.
fn describe(error: &ErrMode<ContextError>) -> String {
    let context = match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e,
        ErrMode::Incomplete(_) => return "incomplete placeholder".to_string(),
    };
    let label = context.context().find_map(|c| match c {
        StrContext::Label(label) => Some(*label),
        _ => None,
    });
    match label {
        Some(label) => format!("expected {label}"),
        None => "invalid placeholder".to_string(),
    }
}
