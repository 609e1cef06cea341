//! Type-parameter substitution (spec §4.4): a `Name -> IrType` map applied
//! structurally. Substituting into a reference's type arguments preserves
//! that reference's own resolved CLR binding — only the arguments change.

use rustc_hash::FxHashMap;
use struxc_ir::ir::{IrType, Member};
use struxc_ir::Name;

#[must_use]
pub fn substitute(ty: &IrType, map: &FxHashMap<Name, IrType>) -> IrType {
    match ty {
        IrType::TypeParameter(name) => map.get(name).cloned().unwrap_or_else(|| ty.clone()),
        IrType::Reference { name, type_args, clr_binding, .. } => IrType::Reference {
            name: *name,
            type_args: type_args.iter().map(|arg| substitute(arg, map)).collect(),
            clr_binding: clr_binding.clone(),
            // Type arguments changed, so a previously-lifted member list is
            // stale; the next lookup recomputes it.
            structural_members: None,
        },
        IrType::Array { element, origin } => {
            IrType::Array { element: Box::new(substitute(element, map)), origin: *origin }
        }
        IrType::Tuple(elems) => IrType::Tuple(elems.iter().map(|t| substitute(t, map)).collect()),
        IrType::Function { params, ret } => IrType::Function {
            params: params.iter().map(|p| substitute(p, map)).collect(),
            ret: Box::new(substitute(ret, map)),
        },
        IrType::Object { members } => IrType::Object { members: substitute_members(members, map) },
        IrType::Dictionary { key, value } => IrType::Dictionary {
            key: Box::new(substitute(key, map)),
            value: Box::new(substitute(value, map)),
        },
        IrType::Union(parts) => IrType::Union(parts.iter().map(|t| substitute(t, map)).collect()),
        IrType::Intersection(parts) => IrType::Intersection(parts.iter().map(|t| substitute(t, map)).collect()),
        IrType::Primitive(_)
        | IrType::Literal(_)
        | IrType::Any
        | IrType::Unknown
        | IrType::Void
        | IrType::Never => ty.clone(),
    }
}

fn substitute_members(members: &[Member], map: &FxHashMap<Name, IrType>) -> Vec<Member> {
    members
        .iter()
        .map(|m| Member { name: m.name, ty: substitute(&m.ty, map), optional: m.optional, readonly: m.readonly })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_ir::ir::PrimitiveType;
    use struxc_ir::StringInterner;

    #[test]
    fn substitutes_bare_type_parameter() {
        let mut interner = StringInterner::new();
        let t = interner.intern("T");
        let mut map = FxHashMap::default();
        map.insert(t, IrType::Primitive(PrimitiveType::String));

        let result = substitute(&IrType::TypeParameter(t), &map);
        assert_eq!(result, IrType::Primitive(PrimitiveType::String));
    }

    #[test]
    fn unmapped_type_parameter_is_unchanged() {
        let mut interner = StringInterner::new();
        let t = interner.intern("T");
        let u = interner.intern("U");
        let mut map = FxHashMap::default();
        map.insert(u, IrType::Primitive(PrimitiveType::Boolean));

        let result = substitute(&IrType::TypeParameter(t), &map);
        assert_eq!(result, IrType::TypeParameter(t));
    }

    #[test]
    fn substitution_preserves_clr_binding() {
        let mut interner = StringInterner::new();
        let t = interner.intern("T");
        let list = interner.intern("List");
        let mut map = FxHashMap::default();
        map.insert(t, IrType::Primitive(PrimitiveType::String));

        let ty = IrType::Reference {
            name: list,
            type_args: vec![IrType::TypeParameter(t)],
            clr_binding: Some("System.Collections.Generic.List`1".to_string()),
            structural_members: None,
        };
        let result = substitute(&ty, &map);
        match result {
            IrType::Reference { clr_binding, type_args, .. } => {
                assert_eq!(clr_binding, Some("System.Collections.Generic.List`1".to_string()));
                assert_eq!(type_args, vec![IrType::Primitive(PrimitiveType::String)]);
            }
            _ => panic!("expected a reference"),
        }
    }
}
