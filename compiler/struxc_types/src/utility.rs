//! Utility-type expansion (spec §4.4). Expansion always produces an
//! `Object` shape — at this IR level a utility type never round-trips back
//! to a named reference, which matches how the IR Builder applies these
//! during type conversion: fully-applied utility types are expanded
//! immediately; applied to an open type parameter, the syntax is preserved
//! instead (the builder's job, not this crate's).

use struxc_ir::ir::{IrType, LiteralType, Member};
use struxc_ir::{Name, StringInterner};

use crate::env::{structural_members, TypeEnv};
use crate::error::TypeError;

#[must_use]
pub fn expand_partial(ty: &IrType, env: &dyn TypeEnv) -> IrType {
    map_members(ty, env, |m| Member { optional: true, ..m })
}

#[must_use]
pub fn expand_required(ty: &IrType, env: &dyn TypeEnv) -> IrType {
    map_members(ty, env, |m| Member { optional: false, ..m })
}

#[must_use]
pub fn expand_readonly(ty: &IrType, env: &dyn TypeEnv) -> IrType {
    map_members(ty, env, |m| Member { readonly: true, ..m })
}

fn map_members(ty: &IrType, env: &dyn TypeEnv, f: impl Fn(Member) -> Member) -> IrType {
    let members = structural_members(ty, env).unwrap_or_default();
    IrType::Object { members: members.into_iter().map(f).collect() }
}

/// Extracts the literal key names from a `Pick`/`Omit` key argument, or
/// `None` if it isn't a finite literal-string union (TSN7414).
fn literal_key_set(keys: &IrType) -> Option<Vec<&str>> {
    keys.split_union()
        .into_iter()
        .map(|part| match part {
            IrType::Literal(LiteralType::String(s)) => Some(s.as_str()),
            _ => None,
        })
        .collect()
}

pub fn expand_pick(ty: &IrType, keys: &IrType, env: &dyn TypeEnv, interner: &StringInterner) -> Result<IrType, TypeError> {
    let key_set = literal_key_set(keys).ok_or(TypeError::NonLiteralKeySet { operation: "Pick" })?;
    let members = structural_members(ty, env).unwrap_or_default();
    let picked = members
        .into_iter()
        .filter(|m| key_set.contains(&interner.resolve(m.name)))
        .collect();
    Ok(IrType::Object { members: picked })
}

pub fn expand_omit(ty: &IrType, keys: &IrType, env: &dyn TypeEnv, interner: &StringInterner) -> Result<IrType, TypeError> {
    let key_set = literal_key_set(keys).ok_or(TypeError::NonLiteralKeySet { operation: "Omit" })?;
    let members = structural_members(ty, env).unwrap_or_default();
    let kept = members
        .into_iter()
        .filter(|m| !key_set.contains(&interner.resolve(m.name)))
        .collect();
    Ok(IrType::Object { members: kept })
}

/// `Record<K, V>`: a finite literal-string (or literal-string union) key
/// produces an object type with those keys; a string/number primitive key
/// produces a dictionary instead.
#[must_use]
pub fn expand_record(key: &IrType, value: &IrType, interner: &mut StringInterner) -> IrType {
    if let Some(key_set) = literal_key_set(key) {
        let owned: Vec<Name> = key_set.iter().map(|k| interner.intern(k)).collect();
        return IrType::Object {
            members: owned.into_iter().map(|name| Member { name, ty: value.clone(), optional: false, readonly: false }).collect(),
        };
    }
    IrType::Dictionary { key: Box::new(key.clone()), value: Box::new(value.clone()) }
}

#[must_use]
pub fn expand_non_nullable(ty: &IrType) -> IrType {
    rebuild_union(ty.split_union().into_iter().filter(|part| !part.is_nullish()).cloned().collect())
}

#[must_use]
pub fn expand_exclude(ty: &IrType, excluded: &IrType) -> IrType {
    let excluded_parts: Vec<&IrType> = excluded.split_union();
    rebuild_union(
        ty.split_union().into_iter().filter(|part| !excluded_parts.iter().any(|e| *e == *part)).cloned().collect(),
    )
}

#[must_use]
pub fn expand_extract(ty: &IrType, matching: &IrType) -> IrType {
    let matching_parts: Vec<&IrType> = matching.split_union();
    rebuild_union(
        ty.split_union().into_iter().filter(|part| matching_parts.iter().any(|e| *e == *part)).cloned().collect(),
    )
}

fn rebuild_union(mut parts: Vec<IrType>) -> IrType {
    match parts.len() {
        0 => IrType::Never,
        1 => parts.remove(0),
        _ => IrType::Union(parts),
    }
}

pub fn expand_return_type(ty: &IrType) -> Result<IrType, TypeError> {
    match ty {
        IrType::Function { ret, .. } => Ok((**ret).clone()),
        _ => Err(TypeError::NotAFunction { operation: "ReturnType" }),
    }
}

pub fn expand_parameters(ty: &IrType) -> Result<IrType, TypeError> {
    match ty {
        IrType::Function { params, .. } => Ok(IrType::Tuple(params.clone())),
        _ => Err(TypeError::NotAFunction { operation: "Parameters" }),
    }
}

/// Pre-interned names of the reference types `Awaited<T>` recursively
/// unwraps (spec §4.4). Built once per compilation, mirroring the
/// well-known-name caching the teacher's type checker uses for its own
/// built-in generics.
pub struct AwaitableNames {
    promise: Name,
    task: Name,
    value_task: Name,
}

impl AwaitableNames {
    #[must_use]
    pub fn new(interner: &mut StringInterner) -> Self {
        Self {
            promise: interner.intern("Promise"),
            task: interner.intern("Task"),
            value_task: interner.intern("ValueTask"),
        }
    }
}

#[must_use]
pub fn expand_awaited(ty: &IrType, awaitable: &AwaitableNames) -> IrType {
    match ty {
        IrType::Reference { name, type_args, .. }
            if (*name == awaitable.promise || *name == awaitable.task || *name == awaitable.value_task) && type_args.len() == 1 =>
        {
            expand_awaited(&type_args[0], awaitable)
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TypeRegistry;
    use struxc_ir::ir::PrimitiveType;

    #[test]
    fn partial_marks_every_member_optional() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let env = TypeRegistry::new();
        let ty = IrType::Object {
            members: vec![Member { name: a, ty: IrType::Primitive(PrimitiveType::String), optional: false, readonly: false }],
        };
        let partial = expand_partial(&ty, &env);
        match partial {
            IrType::Object { members } => assert!(members[0].optional),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn pick_keeps_only_named_members() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        let env = TypeRegistry::new();
        let ty = IrType::Object {
            members: vec![
                Member { name: a, ty: IrType::Primitive(PrimitiveType::String), optional: false, readonly: false },
                Member { name: b, ty: IrType::Primitive(PrimitiveType::Boolean), optional: false, readonly: false },
            ],
        };
        let keys = IrType::Literal(LiteralType::String("a".to_string()));
        let picked = expand_pick(&ty, &keys, &env, &interner).expect("literal key set");
        match picked {
            IrType::Object { members } => {
                assert_eq!(members.len(), 1);
                assert_eq!(members[0].name, a);
            }
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn pick_rejects_non_literal_key_set() {
        let interner = StringInterner::new();
        let env = TypeRegistry::new();
        let ty = IrType::Object { members: vec![] };
        let keys = IrType::Primitive(PrimitiveType::String);
        assert_eq!(expand_pick(&ty, &keys, &env, &interner), Err(TypeError::NonLiteralKeySet { operation: "Pick" }));
    }

    #[test]
    fn record_with_string_key_becomes_dictionary() {
        let mut interner = StringInterner::new();
        let key = IrType::Primitive(PrimitiveType::String);
        let value = IrType::Primitive(PrimitiveType::Boolean);
        assert!(matches!(expand_record(&key, &value, &mut interner), IrType::Dictionary { .. }));
    }

    #[test]
    fn non_nullable_strips_null_and_undefined() {
        let ty = IrType::Union(vec![
            IrType::Primitive(PrimitiveType::String),
            IrType::Literal(LiteralType::Null),
            IrType::Literal(LiteralType::Undefined),
        ]);
        assert_eq!(expand_non_nullable(&ty), IrType::Primitive(PrimitiveType::String));
    }

    #[test]
    fn awaited_unwraps_nested_promise() {
        let mut interner = StringInterner::new();
        let awaitable = AwaitableNames::new(&mut interner);
        let inner = IrType::Primitive(PrimitiveType::String);
        let task = IrType::Reference {
            name: awaitable.task,
            type_args: vec![inner.clone()],
            clr_binding: None,
            structural_members: None,
        };
        let promise = IrType::Reference {
            name: awaitable.promise,
            type_args: vec![task],
            clr_binding: None,
            structural_members: None,
        };
        assert_eq!(expand_awaited(&promise, &awaitable), inner);
    }

    #[test]
    fn return_type_of_non_function_errors() {
        assert_eq!(
            expand_return_type(&IrType::Primitive(PrimitiveType::Boolean)),
            Err(TypeError::NotAFunction { operation: "ReturnType" })
        );
    }
}
