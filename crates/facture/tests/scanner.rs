//! Integration tests for the placeholder scanner.

use facture::ParseError;
use facture::parser::{RawSegment, Scanner, Span};

fn scan(input: &str) -> Vec<RawSegment> {
    Scanner::new(input).collect::<Result<_, _>>().unwrap()
}

// =============================================================================
// Literal text
// =============================================================================

#[test]
fn test_empty_template_yields_nothing() {
    assert!(scan("").is_empty());
}

#[test]
fn test_text_without_delimiters_is_one_literal() {
    assert_eq!(
        scan("Invoice for March"),
        vec![RawSegment::Literal(Span::new(0, 17))]
    );
}

// =============================================================================
// Placeholders and escapes
// =============================================================================

#[test]
fn test_placeholder_span_excludes_delimiters() {
    let input = "Dear %name%,";
    let segments = scan(input);
    assert_eq!(
        segments,
        vec![
            RawSegment::Literal(Span::new(0, 5)),
            RawSegment::Placeholder(Span::new(6, 4)),
            RawSegment::Literal(Span::new(11, 1)),
        ]
    );
    match segments[1] {
        RawSegment::Placeholder(span) => assert_eq!(span.slice(input), "name"),
        _ => panic!("expected placeholder"),
    }
}

#[test]
fn test_double_percent_is_an_escape() {
    assert_eq!(scan("%%"), vec![RawSegment::Escape(Span::new(0, 2))]);
}

#[test]
fn test_adjacent_placeholders() {
    let input = "%a%%b%";
    assert_eq!(
        scan(input),
        vec![
            RawSegment::Placeholder(Span::new(1, 1)),
            RawSegment::Placeholder(Span::new(4, 1)),
        ]
    );
}

#[test]
fn test_directive_block_stays_inside_placeholder_span() {
    let input = "%name{min=4,case=A}%";
    let segments = scan(input);
    assert_eq!(segments.len(), 1);
    match segments[0] {
        RawSegment::Placeholder(span) => assert_eq!(span.slice(input), "name{min=4,case=A}"),
        _ => panic!("expected placeholder"),
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unterminated_placeholder_is_an_error() {
    let mut scanner = Scanner::new("Total: %total");
    assert_eq!(
        scanner.next(),
        Some(Ok(RawSegment::Literal(Span::new(0, 7))))
    );
    match scanner.next() {
        Some(Err(ParseError::UnterminatedPlaceholder { line, column, span })) => {
            assert_eq!((line, column), (1, 8));
            assert_eq!(span, Span::new(7, 6));
        }
        other => panic!("expected unterminated placeholder, got {other:?}"),
    }
    assert_eq!(scanner.next(), None);
}

#[test]
fn test_odd_number_of_percent_signs_is_unterminated() {
    let result: Result<Vec<_>, _> = Scanner::new("100%%%").collect();
    assert!(matches!(
        result,
        Err(ParseError::UnterminatedPlaceholder { column: 6, .. })
    ));
}

#[test]
fn test_unterminated_reports_line_of_opening_delimiter() {
    let result: Result<Vec<_>, _> = Scanner::new("line one\nline %two").collect();
    assert!(matches!(
        result,
        Err(ParseError::UnterminatedPlaceholder {
            line: 2,
            column: 6,
            ..
        })
    ));
}
