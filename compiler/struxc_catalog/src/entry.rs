//! Resolved, immutable catalog entries built from [`crate::descriptor`]
//! values once a descriptor is known to be well-formed.

use rustc_hash::FxHashMap;

use crate::descriptor::{ParamModifier, PropertyDescriptor, TypeDescriptor, TypeKind, Visibility};
use crate::signature::{parameter_types, signature_key};

#[derive(Debug, Clone)]
pub struct MethodEntry {
    pub clr_name: String,
    pub parameter_count: u32,
    pub parameter_types: Vec<String>,
    pub signature_key: String,
    pub is_static: bool,
    pub is_virtual: bool,
    pub visibility: Visibility,
    pub parameter_modifiers: Vec<ParamModifier>,
}

#[derive(Debug, Clone)]
pub struct PropertyEntry {
    pub clr_name: String,
    pub type_clr_name: String,
    pub is_static: bool,
    pub visibility: Visibility,
    pub has_getter: bool,
    pub has_setter: bool,
}

/// A single resolved type, indexed by `(name, arity)` for overload lookups
/// and keyed additionally by exact `signature_key` within each bucket.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub clr_name: String,
    pub kind: TypeKind,
    pub base_type: Option<String>,
    pub interfaces: Vec<String>,
    pub properties: Vec<PropertyEntry>,
    methods_by_name_arity: FxHashMap<(String, u32), Vec<MethodEntry>>,
}

impl TypeEntry {
    #[must_use]
    pub fn from_descriptor(descriptor: &TypeDescriptor) -> Self {
        let mut methods_by_name_arity: FxHashMap<(String, u32), Vec<MethodEntry>> = FxHashMap::default();
        for method in &descriptor.methods {
            let param_types = parameter_types(&method.canonical_signature);
            let key = signature_key(&param_types, &method.parameter_modifiers);
            let entry = MethodEntry {
                clr_name: method.clr_name.clone(),
                parameter_count: method.parameter_count,
                parameter_types: param_types,
                signature_key: key,
                is_static: method.is_static,
                is_virtual: method.is_virtual,
                visibility: method.visibility,
                parameter_modifiers: method.parameter_modifiers.clone(),
            };
            methods_by_name_arity
                .entry((method.clr_name.clone(), method.parameter_count))
                .or_default()
                .push(entry);
        }
        TypeEntry {
            clr_name: descriptor.clr_name.clone(),
            kind: descriptor.kind,
            base_type: descriptor.base_type.as_ref().map(|r| r.clr_name.clone()),
            interfaces: descriptor.interfaces.iter().map(|r| r.clr_name.clone()).collect(),
            properties: descriptor.properties.iter().map(PropertyEntry::from_descriptor).collect(),
            methods_by_name_arity,
        }
    }

    #[must_use]
    pub fn overload_count(&self, name: &str, arity: u32) -> usize {
        self.methods_by_name_arity
            .get(&(name.to_string(), arity))
            .map_or(0, Vec::len)
    }

    #[must_use]
    pub fn find_method(&self, name: &str, arity: u32, signature_key: &str) -> Option<&MethodEntry> {
        self.methods_by_name_arity
            .get(&(name.to_string(), arity))?
            .iter()
            .find(|m| m.signature_key == signature_key)
    }

    pub fn methods_named(&self, name: &str, arity: u32) -> impl Iterator<Item = &MethodEntry> {
        self.methods_by_name_arity
            .get(&(name.to_string(), arity))
            .into_iter()
            .flatten()
    }
}

impl PropertyEntry {
    fn from_descriptor(descriptor: &PropertyDescriptor) -> Self {
        PropertyEntry {
            clr_name: descriptor.clr_name.clone(),
            type_clr_name: descriptor.ty.clr_name.clone(),
            is_static: descriptor.is_static,
            visibility: descriptor.visibility,
            has_getter: descriptor.has_getter,
            has_setter: descriptor.has_setter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{CatalogDescriptor, TypeDescriptor};

    fn sample() -> TypeDescriptor {
        let json = r#"{
            "clrName": "System.Collections.Generic.List`1",
            "kind": "class",
            "methods": [
                { "clrName": "Add", "parameterCount": 1, "canonicalSignature": "(T):Void", "visibility": "public" },
                { "clrName": "Add", "parameterCount": 1, "canonicalSignature": "(Int32):Void", "visibility": "public" }
            ]
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn overload_count_counts_all_arity_matches() {
        let entry = TypeEntry::from_descriptor(&sample());
        assert_eq!(entry.overload_count("Add", 1), 2);
        assert_eq!(entry.overload_count("Add", 2), 0);
    }

    #[test]
    fn find_method_matches_exact_signature_key() {
        let entry = TypeEntry::from_descriptor(&sample());
        let found = entry.find_method("Add", 1, "Int32|mods=").unwrap();
        assert_eq!(found.parameter_types, vec!["Int32".to_string()]);
    }

    #[test]
    fn namespace_wraps_multiple_types() {
        let json = r#"{
            "namespace": "System.Collections.Generic",
            "types": [ { "clrName": "A", "kind": "class" }, { "clrName": "B", "kind": "interface" } ]
        }"#;
        let descriptor: CatalogDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.types.len(), 2);
    }
}
