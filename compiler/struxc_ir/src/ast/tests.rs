use super::*;
use crate::interner::StringInterner;
use crate::span::Span;

#[test]
fn literal_expr_round_trips_through_kind() {
    let expr = Expr::new(Span::new(0, 2), ExprKind::Literal(Literal::Integer(42)));
    assert!(matches!(expr.kind, ExprKind::Literal(Literal::Integer(42))));
}

#[test]
fn binding_pattern_identifier_extraction() {
    let mut interner = StringInterner::new();
    let name = interner.intern("x");
    let pattern = BindingPattern::Identifier {
        span: Span::DUMMY,
        name,
        ty: None,
    };
    assert_eq!(pattern.as_identifier(), Some(name));
}

#[test]
fn array_pattern_has_no_single_identifier() {
    let pattern = BindingPattern::Array {
        span: Span::DUMMY,
        elements: vec![],
        rest: None,
    };
    assert_eq!(pattern.as_identifier(), None);
}
