//! Assignability (spec §4.4 `isAssignable`): structural for object/tuple/
//! function, nominal for references, with union-split on the source side,
//! union-join on the target side, literal-to-primitive widening, and the
//! `never <: T <: any` identities.

use struxc_ir::ir::{IrType, LiteralType, Member, PrimitiveType};

use crate::env::{structural_members, TypeEnv};

#[must_use]
pub fn is_assignable(from: &IrType, to: &IrType, env: &dyn TypeEnv) -> bool {
    if matches!(from, IrType::Never) {
        return true;
    }
    if matches!(to, IrType::Any | IrType::Unknown) {
        return true;
    }
    if matches!(from, IrType::Any) {
        return true;
    }

    let from_parts = from.split_union();
    if from_parts.len() > 1 {
        return from_parts.iter().all(|part| is_assignable(part, to, env));
    }
    let to_parts = to.split_union();
    if to_parts.len() > 1 {
        return to_parts.iter().any(|part| is_assignable(from, part, env));
    }

    if let IrType::Literal(lit) = from {
        if literal_widens_to(lit, to) {
            return true;
        }
    }

    match (from, to) {
        (IrType::Primitive(a), IrType::Primitive(b)) => primitives_compatible(a, b),
        (IrType::Literal(a), IrType::Literal(b)) => a == b,
        (IrType::Void, IrType::Void) => true,
        (IrType::TypeParameter(a), IrType::TypeParameter(b)) => a == b,
        (IrType::Reference { name: n1, type_args: a1, .. }, IrType::Reference { name: n2, type_args: a2, .. }) => {
            n1 == n2 && a1.len() == a2.len() && a1.iter().zip(a2).all(|(x, y)| is_assignable(x, y, env))
        }
        (IrType::Array { element: e1, .. }, IrType::Array { element: e2, .. }) => is_assignable(e1, e2, env),
        (IrType::Tuple(a), IrType::Tuple(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| is_assignable(x, y, env))
        }
        (IrType::Function { params: p1, ret: r1 }, IrType::Function { params: p2, ret: r2 }) => {
            // Contravariant in parameters, covariant in return type.
            p1.len() == p2.len()
                && p1.iter().zip(p2).all(|(a, b)| is_assignable(b, a, env))
                && is_assignable(r1, r2, env)
        }
        (IrType::Dictionary { key: k1, value: v1 }, IrType::Dictionary { key: k2, value: v2 }) => {
            is_assignable(k1, k2, env) && is_assignable(v1, v2, env)
        }
        (_, IrType::Object { members: to_members }) => {
            let from_members = structural_members(from, env).unwrap_or_default();
            object_assignable(&from_members, to_members, env)
        }
        (IrType::Intersection(parts), _) => parts.iter().any(|part| is_assignable(part, to, env)),
        (_, IrType::Intersection(parts)) => parts.iter().all(|part| is_assignable(from, part, env)),
        _ => false,
    }
}

fn object_assignable(from_members: &[Member], to_members: &[Member], env: &dyn TypeEnv) -> bool {
    to_members.iter().all(|target| match from_members.iter().find(|m| m.name == target.name) {
        Some(source) => is_assignable(&source.ty, &target.ty, env),
        None => target.optional,
    })
}

fn literal_widens_to(lit: &LiteralType, to: &IrType) -> bool {
    matches!(
        (lit, to),
        (LiteralType::String(_), IrType::Primitive(PrimitiveType::String))
            | (LiteralType::Number(_), IrType::Primitive(PrimitiveType::Number { .. }))
            | (LiteralType::Boolean(_), IrType::Primitive(PrimitiveType::Boolean))
    )
}

fn primitives_compatible(a: &PrimitiveType, b: &PrimitiveType) -> bool {
    matches!(
        (a, b),
        (PrimitiveType::String, PrimitiveType::String)
            | (PrimitiveType::Boolean, PrimitiveType::Boolean)
            | (PrimitiveType::Number { .. }, PrimitiveType::Number { .. })
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TypeRegistry;
    use struxc_ir::StringInterner;

    #[test]
    fn never_is_assignable_to_anything() {
        let env = TypeRegistry::new();
        assert!(is_assignable(&IrType::Never, &IrType::Primitive(PrimitiveType::String), &env));
    }

    #[test]
    fn anything_is_assignable_to_any() {
        let env = TypeRegistry::new();
        assert!(is_assignable(&IrType::Primitive(PrimitiveType::Boolean), &IrType::Any, &env));
    }

    #[test]
    fn string_literal_widens_to_string() {
        let env = TypeRegistry::new();
        let from = IrType::Literal(LiteralType::String("ok".into()));
        let to = IrType::Primitive(PrimitiveType::String);
        assert!(is_assignable(&from, &to, &env));
    }

    #[test]
    fn source_union_requires_every_part_assignable() {
        let env = TypeRegistry::new();
        let from = IrType::Union(vec![
            IrType::Primitive(PrimitiveType::String),
            IrType::Primitive(PrimitiveType::Boolean),
        ]);
        let to = IrType::Primitive(PrimitiveType::String);
        assert!(!is_assignable(&from, &to, &env));
    }

    #[test]
    fn target_union_requires_one_part_assignable() {
        let env = TypeRegistry::new();
        let from = IrType::Primitive(PrimitiveType::Boolean);
        let to = IrType::Union(vec![
            IrType::Primitive(PrimitiveType::String),
            IrType::Primitive(PrimitiveType::Boolean),
        ]);
        assert!(is_assignable(&from, &to, &env));
    }

    #[test]
    fn object_with_extra_optional_member_is_still_assignable() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        let env = TypeRegistry::new();

        let from = IrType::Object {
            members: vec![Member { name: a, ty: IrType::Primitive(PrimitiveType::String), optional: false, readonly: false }],
        };
        let to = IrType::Object {
            members: vec![
                Member { name: a, ty: IrType::Primitive(PrimitiveType::String), optional: false, readonly: false },
                Member { name: b, ty: IrType::Primitive(PrimitiveType::Boolean), optional: true, readonly: false },
            ],
        };
        assert!(is_assignable(&from, &to, &env));
    }

    #[test]
    fn object_missing_required_member_is_not_assignable() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let env = TypeRegistry::new();

        let from = IrType::Object { members: vec![] };
        let to = IrType::Object {
            members: vec![Member { name: a, ty: IrType::Primitive(PrimitiveType::String), optional: false, readonly: false }],
        };
        assert!(!is_assignable(&from, &to, &env));
    }
}
