//! Union narrowing (spec §4.4): `typeof`, `instanceof`, `in`, and null
//! guards each filter a union down to the constituents consistent with the
//! guard. Narrowed bindings are tracked in a per-scope map the IR Builder
//! consults while converting a guarded branch's body.

use rustc_hash::FxHashMap;
use struxc_ir::ir::{IrType, PrimitiveType};
use struxc_ir::Name;

use crate::assign::is_assignable;
use crate::env::{structural_members, TypeEnv};

/// `typeof x === "<literal>"` keeps primitive constituents matching the
/// runtime-typeof tag; `"string"`/`"number"`/`"boolean"` are the only tags
/// the source language's primitive set can produce.
#[must_use]
pub fn narrow_by_typeof(ty: &IrType, literal: &str) -> IrType {
    let kept: Vec<IrType> = ty
        .split_union()
        .into_iter()
        .filter(|part| match (part, literal) {
            (IrType::Primitive(PrimitiveType::String), "string") => true,
            (IrType::Primitive(PrimitiveType::Number { .. }), "number") => true,
            (IrType::Primitive(PrimitiveType::Boolean), "boolean") => true,
            _ => false,
        })
        .cloned()
        .collect();
    rebuild(kept)
}

/// `x instanceof C` keeps constituents `C` is assignable to — the narrowed
/// value is known to satisfy at least that much of the original union.
#[must_use]
pub fn narrow_by_instanceof(ty: &IrType, class_ty: &IrType, env: &dyn TypeEnv) -> IrType {
    let kept: Vec<IrType> =
        ty.split_union().into_iter().filter(|part| is_assignable(class_ty, part, env)).cloned().collect();
    rebuild(kept)
}

/// `"prop" in x` keeps constituents whose structural members contain
/// `prop`.
#[must_use]
pub fn narrow_by_in(ty: &IrType, prop: Name, env: &dyn TypeEnv) -> IrType {
    let kept: Vec<IrType> = ty
        .split_union()
        .into_iter()
        .filter(|part| structural_members(part, env).is_some_and(|members| members.iter().any(|m| m.name == prop)))
        .cloned()
        .collect();
    rebuild(kept)
}

/// The else-branch complement of [`narrow_by_typeof`]: keeps constituents
/// that do *not* match the runtime-typeof tag.
#[must_use]
pub fn narrow_by_not_typeof(ty: &IrType, literal: &str) -> IrType {
    let kept: Vec<IrType> = ty
        .split_union()
        .into_iter()
        .filter(|part| {
            !matches!(
                (part, literal),
                (IrType::Primitive(PrimitiveType::String), "string")
                    | (IrType::Primitive(PrimitiveType::Number { .. }), "number")
                    | (IrType::Primitive(PrimitiveType::Boolean), "boolean")
            )
        })
        .cloned()
        .collect();
    rebuild(kept)
}

/// The else-branch complement of [`narrow_by_instanceof`]: keeps
/// constituents `C` is not assignable to.
#[must_use]
pub fn narrow_by_not_instanceof(ty: &IrType, class_ty: &IrType, env: &dyn TypeEnv) -> IrType {
    let kept: Vec<IrType> =
        ty.split_union().into_iter().filter(|part| !is_assignable(class_ty, part, env)).cloned().collect();
    rebuild(kept)
}

/// The else-branch complement of [`narrow_by_in`]: keeps constituents whose
/// structural members do *not* contain `prop`.
#[must_use]
pub fn narrow_by_not_in(ty: &IrType, prop: Name, env: &dyn TypeEnv) -> IrType {
    let kept: Vec<IrType> = ty
        .split_union()
        .into_iter()
        .filter(|part| !structural_members(part, env).is_some_and(|members| members.iter().any(|m| m.name == prop)))
        .cloned()
        .collect();
    rebuild(kept)
}

/// `x == null` / `x != null`: `keep_nullish` selects which side of the
/// split guard's branch is being narrowed.
#[must_use]
pub fn narrow_by_null_guard(ty: &IrType, keep_nullish: bool) -> IrType {
    let kept: Vec<IrType> =
        ty.split_union().into_iter().filter(|part| part.is_nullish() == keep_nullish).cloned().collect();
    rebuild(kept)
}

fn rebuild(mut parts: Vec<IrType>) -> IrType {
    match parts.len() {
        0 => IrType::Never,
        1 => parts.remove(0),
        _ => IrType::Union(parts),
    }
}

/// Per-scope map of narrowed bindings (spec §4.4: "narrowed bindings are
/// propagated to the IR via a per-scope map"). Mirrors `struxc_binding`'s
/// `ScopeStack`: one frame per lexical scope, innermost wins on lookup.
#[derive(Default)]
struct Frame {
    narrowed: FxHashMap<Name, IrType>,
}

pub struct NarrowedScope {
    frames: Vec<Frame>,
}

impl Default for NarrowedScope {
    fn default() -> Self {
        Self::new()
    }
}

impl NarrowedScope {
    #[must_use]
    pub fn new() -> Self {
        NarrowedScope { frames: vec![Frame::default()] }
    }

    pub fn enter(&mut self) {
        self.frames.push(Frame::default());
    }

    pub fn exit(&mut self) {
        self.frames.pop();
        debug_assert!(!self.frames.is_empty(), "popped the module-level narrowing frame");
    }

    pub fn narrow(&mut self, name: Name, ty: IrType) {
        self.frames.last_mut().expect("NarrowedScope always has at least one frame").narrowed.insert(name, ty);
    }

    #[must_use]
    pub fn lookup(&self, name: Name) -> Option<&IrType> {
        self.frames.iter().rev().find_map(|frame| frame.narrowed.get(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TypeRegistry;
    use struxc_ir::StringInterner;

    #[test]
    fn typeof_string_keeps_only_string() {
        let ty = IrType::Union(vec![IrType::Primitive(PrimitiveType::String), IrType::Primitive(PrimitiveType::Boolean)]);
        assert_eq!(narrow_by_typeof(&ty, "string"), IrType::Primitive(PrimitiveType::String));
    }

    #[test]
    fn null_guard_splits_nullable_union() {
        let ty = IrType::Union(vec![
            IrType::Primitive(PrimitiveType::String),
            IrType::Literal(struxc_ir::ir::LiteralType::Null),
        ]);
        assert_eq!(narrow_by_null_guard(&ty, false), IrType::Primitive(PrimitiveType::String));
        assert_eq!(narrow_by_null_guard(&ty, true), IrType::Literal(struxc_ir::ir::LiteralType::Null));
    }

    #[test]
    fn narrowed_scope_respects_lexical_nesting() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");
        let mut scope = NarrowedScope::new();
        scope.narrow(x, IrType::Primitive(PrimitiveType::String));
        scope.enter();
        assert_eq!(scope.lookup(x), Some(&IrType::Primitive(PrimitiveType::String)));
        scope.narrow(x, IrType::Primitive(PrimitiveType::Boolean));
        assert_eq!(scope.lookup(x), Some(&IrType::Primitive(PrimitiveType::Boolean)));
        scope.exit();
        assert_eq!(scope.lookup(x), Some(&IrType::Primitive(PrimitiveType::String)));
    }

    #[test]
    fn not_in_guard_keeps_non_matching_object_shape() {
        let mut interner = StringInterner::new();
        let ok = interner.intern("ok");
        let err = interner.intern("err");
        let env = TypeRegistry::new();
        let ty = IrType::Union(vec![
            IrType::Object { members: vec![struxc_ir::ir::Member { name: ok, ty: IrType::Primitive(PrimitiveType::String), optional: false, readonly: false }] },
            IrType::Object { members: vec![struxc_ir::ir::Member { name: err, ty: IrType::Primitive(PrimitiveType::String), optional: false, readonly: false }] },
        ]);
        let narrowed = narrow_by_not_in(&ty, ok, &env);
        match narrowed {
            IrType::Object { members } => assert_eq!(members[0].name, err),
            other => panic!("expected the err-branch object, got {other:?}"),
        }
    }

    #[test]
    fn not_typeof_string_drops_string() {
        let ty = IrType::Union(vec![IrType::Primitive(PrimitiveType::String), IrType::Primitive(PrimitiveType::Boolean)]);
        assert_eq!(narrow_by_not_typeof(&ty, "string"), IrType::Primitive(PrimitiveType::Boolean));
    }

    #[test]
    fn in_guard_keeps_matching_object_shape() {
        let mut interner = StringInterner::new();
        let ok = interner.intern("ok");
        let err = interner.intern("err");
        let env = TypeRegistry::new();
        let ty = IrType::Union(vec![
            IrType::Object {
                members: vec![struxc_ir::ir::Member {
                    name: ok,
                    ty: IrType::Primitive(PrimitiveType::String),
                    optional: false,
                    readonly: false,
                }],
            },
            IrType::Object {
                members: vec![struxc_ir::ir::Member {
                    name: err,
                    ty: IrType::Primitive(PrimitiveType::String),
                    optional: false,
                    readonly: false,
                }],
            },
        ]);
        let narrowed = narrow_by_in(&ty, ok, &env);
        match narrowed {
            IrType::Object { members } => assert_eq!(members[0].name, ok),
            other => panic!("expected the ok-branch object, got {other:?}"),
        }
    }
}
