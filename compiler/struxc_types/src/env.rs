//! Nominal-to-structural lift (spec §4.4): a reference type's structural
//! member list, computed on demand and cached.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use struxc_ir::ir::{IrType, Member};
use struxc_ir::Name;

/// Supplies the structural member list a locally-declared class/interface
/// was lowered to, keyed by its name. Built by `struxc_build` from the class
/// and interface declarations it converts; this crate only consumes it.
pub trait TypeEnv {
    fn declared_members(&self, reference_name: Name) -> Option<Vec<Member>>;
}

/// The concrete [`TypeEnv`] struxc_build populates. Flattening a derived
/// class's inherited members walks `extends` once per name and caches the
/// result, since the same reference is typically looked up many times
/// across a module (every assignability check against it, every narrowing
/// guard).
#[derive(Default)]
pub struct TypeRegistry {
    own_members: FxHashMap<Name, Vec<Member>>,
    extends: FxHashMap<Name, Name>,
    cache: Mutex<FxHashMap<Name, Vec<Member>>>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: Name, members: Vec<Member>, extends: Option<Name>) {
        self.own_members.insert(name, members);
        if let Some(base) = extends {
            self.extends.insert(name, base);
        }
        self.cache.lock().remove(&name);
    }

    fn flatten(&self, name: Name) -> Option<Vec<Member>> {
        let mut result = Vec::new();
        if let Some(&base) = self.extends.get(&name) {
            if let Some(inherited) = self.declared_members(base) {
                result.extend(inherited);
            }
        }
        result.extend(self.own_members.get(&name)?.iter().cloned());
        Some(result)
    }
}

impl TypeEnv for TypeRegistry {
    fn declared_members(&self, reference_name: Name) -> Option<Vec<Member>> {
        if let Some(cached) = self.cache.lock().get(&reference_name) {
            return Some(cached.clone());
        }
        let members = self.flatten(reference_name)?;
        self.cache.lock().insert(reference_name, members.clone());
        Some(members)
    }
}

/// The structural member list for `ty`, if it has one: an already-populated
/// cache on the reference itself, an object literal's own members, or a
/// fresh lookup through `env` for an unresolved reference.
#[must_use]
pub fn structural_members(ty: &IrType, env: &dyn TypeEnv) -> Option<Vec<Member>> {
    match ty {
        IrType::Reference { structural_members: Some(members), .. } => Some(members.clone()),
        IrType::Reference { name, .. } => env.declared_members(*name),
        IrType::Object { members } => Some(members.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_ir::ir::IrType;
    use struxc_ir::StringInterner;

    #[test]
    fn flattens_inherited_members_once() {
        let mut interner = StringInterner::new();
        let base = interner.intern("Base");
        let derived = interner.intern("Derived");
        let id = interner.intern("id");
        let name = interner.intern("name");

        let mut registry = TypeRegistry::new();
        registry.register(
            base,
            vec![Member { name: id, ty: IrType::Primitive(struxc_ir::ir::PrimitiveType::String), optional: false, readonly: false }],
            None,
        );
        registry.register(
            derived,
            vec![Member { name, ty: IrType::Primitive(struxc_ir::ir::PrimitiveType::String), optional: false, readonly: false }],
            Some(base),
        );

        let members = registry.declared_members(derived).expect("derived has members");
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name, id);
        assert_eq!(members[1].name, name);
    }

    #[test]
    fn unknown_reference_has_no_members() {
        let mut interner = StringInterner::new();
        let ghost = interner.intern("Ghost");
        let registry = TypeRegistry::new();
        assert_eq!(registry.declared_members(ghost), None);
    }
}
