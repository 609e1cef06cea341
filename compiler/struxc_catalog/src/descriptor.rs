//! On-disk JSON shape of a binding-catalog descriptor file (spec §4.1, §6).
//!
//! One file describes one namespace's worth of target-framework types. A
//! `--type-roots` directory may contain any number of these; see
//! [`crate::catalog::Catalog::load`] for how multiple files and multiple
//! roots are merged.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDescriptor {
    pub namespace: String,
    pub types: Vec<TypeDescriptor>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeRef {
    #[serde(rename = "clrName")]
    pub clr_name: String,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    Public,
    Protected,
    Internal,
    Private,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamModifier {
    None,
    Ref,
    Out,
    In,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub clr_name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub base_type: Option<TypeRef>,
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    pub clr_name: String,
    pub parameter_count: u32,
    pub canonical_signature: String,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_virtual: bool,
    pub visibility: Visibility,
    #[serde(default)]
    pub parameter_modifiers: Vec<ParamModifier>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub clr_name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub is_static: bool,
    pub visibility: Visibility,
    #[serde(default)]
    pub has_getter: bool,
    #[serde(default)]
    pub has_setter: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_descriptor() {
        let json = r#"{
            "namespace": "System.Collections.Generic",
            "types": [
                {
                    "clrName": "System.Collections.Generic.List`1",
                    "kind": "class",
                    "methods": [
                        {
                            "clrName": "Add",
                            "parameterCount": 1,
                            "canonicalSignature": "(T):Void",
                            "visibility": "public"
                        }
                    ]
                }
            ]
        }"#;
        let descriptor: CatalogDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.types.len(), 1);
        assert_eq!(descriptor.types[0].methods[0].clr_name, "Add");
        assert!(!descriptor.types[0].methods[0].is_static);
    }
}
