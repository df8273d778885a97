use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_collects_labels_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E2004)
        .with_message("undefined name `x`")
        .with_label(Span::new(4, 5), "not found in this scope")
        .with_secondary_label(Span::new(0, 3), "in this statement")
        .with_note("declare it first with `var`");

    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
    assert_eq!(diag.notes, vec!["declare it first with `var`".to_string()]);
}

#[test]
fn span_falls_back_to_dummy() {
    let diag = Diagnostic::warning(ErrorCode::E6001).with_message("no location");
    assert!(!diag.is_error());
    assert_eq!(diag.primary_span(), None);
    assert_eq!(diag.span(), Span::DUMMY);
}

#[test]
fn secondary_label_is_not_primary() {
    let diag = Diagnostic::error(ErrorCode::E2005).with_secondary_label(Span::new(1, 2), "here");
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn display_format() {
    let diag = Diagnostic::error(ErrorCode::E2003)
        .with_message("binary operator `+` is not defined for types `int` and `bool`")
        .with_label(Span::new(0, 8), "no matching operator")
        .with_note("operands must have matching types");

    assert_eq!(
        diag.to_string(),
        "error [E2003]: binary operator `+` is not defined for types `int` and `bool`\n  \
         --> 0..8: no matching operator\n  = note: operands must have matching types"
    );
}
