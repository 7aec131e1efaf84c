//! Tests for render failures and error message formatting.

use facture::interpreter::compute_suggestions;
use facture::{Dictionary, ErrorKind, ParseError, RenderError, RenderOptions, render};

fn invoice_dictionary() -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set_text("clientName", "Doe");
    dict.set_text("city", "Tours");
    dict.set_number("total", 99.9);
    dict
}

// =============================================================================
// Missing symbols
// =============================================================================

#[test]
fn missing_symbol_without_directive() {
    let err = render(&invoice_dictionary(), "Hello %nobody%").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingSymbol);
    assert!(matches!(err, RenderError::MissingSymbol { ref name, .. } if name == "nobody"));
}

#[test]
fn missing_symbol_with_directive_uses_same_error() {
    let dict = invoice_dictionary();
    for template in [
        "%nobody{case=A}%",
        "%nobody{min=3}%",
        "%nobody{max=3,case=a}%",
        "%nobody{precision=2}%",
    ] {
        let err = render(&dict, template).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingSymbol, "template {template}");
    }
}

#[test]
fn empty_dictionary_reports_every_placeholder_as_missing() {
    let err = render(&Dictionary::new(), "%a%").unwrap_err();
    assert_eq!(
        err,
        RenderError::MissingSymbol {
            name: "a".into(),
            suggestions: vec![],
        }
    );
}

#[test]
fn missing_symbol_suggests_close_names() {
    let err = render(&invoice_dictionary(), "%clientNme%").unwrap_err();
    match err {
        RenderError::MissingSymbol { suggestions, .. } => {
            assert_eq!(suggestions, vec!["clientName"]);
        }
        other => panic!("expected missing symbol, got {other:?}"),
    }
}

#[test]
fn suggestions_can_be_disabled() {
    let options = RenderOptions::builder().max_suggestions(0).build();
    let err = invoice_dictionary()
        .render_with("%clientNme%", &options)
        .unwrap_err();
    assert!(matches!(err, RenderError::MissingSymbol { ref suggestions, .. } if suggestions.is_empty()));
}

#[test]
fn missing_symbol_message() {
    let err = render(&invoice_dictionary(), "%cty%").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"symbol not found: 'cty', did you mean: city?");

    let err = render(&invoice_dictionary(), "%zzzzzz%").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"symbol not found: 'zzzzzz'");
}

// =============================================================================
// Malformed placeholders
// =============================================================================

#[test]
fn precision_on_text_is_malformed() {
    let err = render(&invoice_dictionary(), "%city{precision=2}%").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedPlaceholder);
    insta::assert_snapshot!(
        err.to_string(),
        @"cannot apply 'precision=2' to 'city': precision only applies to numbers"
    );
}

#[test]
fn chained_precision_is_always_rejected() {
    let err = render(&invoice_dictionary(), "%total{min=8,precision=1}%").unwrap_err();
    assert!(matches!(err, RenderError::InvalidDirective { ref directive, .. } if directive == "precision=1"));
}

#[test]
fn parse_errors_are_malformed_placeholders() {
    let dict = invoice_dictionary();
    for template in ["%total", "%total{min=x}%", "%total{size=2}%", "%{max=1}%"] {
        let err = render(&dict, template).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedPlaceholder, "template {template}");
        assert!(matches!(err, RenderError::Parse(_)));
    }
}

#[test]
fn parse_error_message_has_location() {
    let err = render(&invoice_dictionary(), "Total:\n  %total{min=x}%").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"malformed placeholder at 2:10: 'min' expects a number, got 'x'"
    );
}

#[test]
fn unterminated_message() {
    let err = render(&invoice_dictionary(), "50% off").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unterminated placeholder at 1:3");
    assert!(matches!(
        err,
        RenderError::Parse(ParseError::UnterminatedPlaceholder { .. })
    ));
}

#[test]
fn syntax_errors_win_over_missing_symbols() {
    // The whole template is parsed before any symbol is resolved.
    let err = render(&Dictionary::new(), "%nobody% then %broken").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedPlaceholder);
}

// =============================================================================
// Suggestions
// =============================================================================

#[test]
fn compute_suggestions_orders_closest_first() {
    let names = ["total", "totals", "subtotal"];
    assert_eq!(
        compute_suggestions("totl", names, 3),
        vec!["total".to_string(), "totals".to_string()]
    );
}

#[test]
fn compute_suggestions_ignores_case_and_limits() {
    let names = ["Item1", "Item2", "Item3", "Item4"];
    let suggestions = compute_suggestions("item", names, 2);
    assert_eq!(suggestions.len(), 2);
    assert!(compute_suggestions("xyz", names, 3).is_empty());
}
