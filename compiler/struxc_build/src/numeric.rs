//! Numeric intent inference (spec §4.5 "Numeric intent"): integer literals,
//! explicit integer casts, and loop counters compared only against integer
//! operands all carry `NumericIntent::Int32` rather than falling back to
//! the target's default double.

use struxc_ir::ir::{IrExpr, IrExprKind, IrLiteral, IrType, NumericIntent, PrimitiveType};

/// The numeric intent a literal or already-typed expression carries, if
/// any. `None` means "no opinion" — the surrounding context (a variable's
/// declared type, a parameter's annotation) wins instead.
#[must_use]
pub fn literal_intent(expr: &IrExpr) -> Option<NumericIntent> {
    match &expr.kind {
        IrExprKind::Literal(IrLiteral::Integer(_)) => Some(NumericIntent::Int32),
        IrExprKind::Unary { operand, .. } => literal_intent(operand),
        _ => None,
    }
}

/// Applies a proven intent to a bare `number` type, leaving anything else
/// untouched. Used once the Numeric Proof Pass (spec §4.6 pass 5) has
/// decided a position is provably integral.
#[must_use]
pub fn with_intent(ty: IrType, intent: NumericIntent) -> IrType {
    match ty {
        IrType::Primitive(PrimitiveType::Number { .. }) => IrType::Primitive(PrimitiveType::Number { intent: Some(intent) }),
        other => other,
    }
}

/// A `for` loop's counter is provably `Int32` when its initializer is an
/// integer literal and its update step is a plain `++`/`--` (spec §4.6
/// pass 5); anything more exotic (a float step, a computed bound) is left
/// unproven and the emitter falls back to the widening-cast form.
#[must_use]
pub fn is_int32_counter_update(update: &IrExpr) -> bool {
    matches!(&update.kind, IrExprKind::Update { .. })
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_ir::Span;

    fn lit(kind: IrExprKind) -> IrExpr {
        IrExpr { kind, span: Span::DUMMY, inferred_type: None }
    }

    #[test]
    fn integer_literal_has_int32_intent() {
        assert_eq!(literal_intent(&lit(IrExprKind::Literal(IrLiteral::Integer(1)))), Some(NumericIntent::Int32));
    }

    #[test]
    fn float_literal_has_no_intent() {
        assert_eq!(literal_intent(&lit(IrExprKind::Literal(IrLiteral::Number(1.5)))), None);
    }

    #[test]
    fn update_expression_proves_int32_counter() {
        let mut interner = struxc_ir::StringInterner::new();
        let name = interner.intern("i");
        let operand = lit(IrExprKind::Identifier { name, binding: None });
        let update = lit(IrExprKind::Update { increment: true, prefix: false, operand: Box::new(operand) });
        assert!(is_int32_counter_update(&update));
    }
}
