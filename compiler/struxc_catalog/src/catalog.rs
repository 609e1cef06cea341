//! The Binding Catalog (spec §4.1): an index over target-framework type and
//! method descriptors, built once per compilation from one or more
//! `--type-roots` directories.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::descriptor::{CatalogDescriptor, ParamModifier};
use crate::entry::{MethodEntry, TypeEntry};
use crate::error::{CatalogFatalError, CatalogLoadWarning};
use crate::signature::signature_key;

#[derive(Default, Debug)]
pub struct Catalog {
    types: FxHashMap<String, TypeEntry>,
}

impl Catalog {
    /// Load descriptors from every `--type-roots` directory.
    ///
    /// Within a single root, a type declared by more than one descriptor
    /// file is resolved last-writer-wins (file order is the sorted path
    /// order within that root). The same type declared by *two different*
    /// roots is a fatal misconfiguration.
    pub fn load(roots: &[PathBuf]) -> Result<(Catalog, Vec<CatalogLoadWarning>), CatalogFatalError> {
        let mut catalog = Catalog::default();
        let mut origin: FxHashMap<String, PathBuf> = FxHashMap::default();
        let mut warnings = Vec::new();

        for root in roots {
            let mut files = Vec::new();
            collect_json_files(root, &mut files);
            files.sort();

            let mut per_root: FxHashMap<String, TypeEntry> = FxHashMap::default();
            for file in files {
                let text = match fs::read_to_string(&file) {
                    Ok(t) => t,
                    Err(e) => {
                        warnings.push(CatalogLoadWarning::Io {
                            path: file.clone(),
                            detail: e.to_string(),
                        });
                        continue;
                    }
                };
                let descriptor: CatalogDescriptor = match serde_json::from_str(&text) {
                    Ok(d) => d,
                    Err(e) => {
                        warnings.push(CatalogLoadWarning::MalformedJson {
                            path: file.clone(),
                            detail: e.to_string(),
                        });
                        continue;
                    }
                };
                for type_descriptor in &descriptor.types {
                    let entry = TypeEntry::from_descriptor(type_descriptor);
                    per_root.insert(entry.clr_name.clone(), entry);
                }
            }

            for (clr_name, entry) in per_root {
                if let Some(prev_root) = origin.get(&clr_name) {
                    if prev_root != root {
                        return Err(CatalogFatalError {
                            clr_name,
                            first_root: prev_root.clone(),
                            second_root: root.clone(),
                        });
                    }
                }
                origin.insert(clr_name.clone(), root.clone());
                catalog.types.insert(clr_name, entry);
            }
        }

        Ok((catalog, warnings))
    }

    #[must_use]
    pub fn resolve_type(&self, clr_name: &str) -> Option<&TypeEntry> {
        self.types.get(clr_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Number of overloads a type itself declares for `name` at `arity`.
    /// Inherited overloads are not counted; a caller that needs the full
    /// visible set walks the base-type chain the same way
    /// [`Catalog::resolve_method`] does.
    #[must_use]
    pub fn overload_count(&self, type_clr_name: &str, name: &str, arity: u32) -> usize {
        self.types
            .get(type_clr_name)
            .map_or(0, |entry| entry.overload_count(name, arity))
    }

    /// Resolve a single call signature by walking the inheritance chain
    /// starting at `type_clr_name`, guarding against base-type cycles that
    /// a malformed descriptor set could introduce.
    #[must_use]
    pub fn resolve_method(
        &self,
        type_clr_name: &str,
        name: &str,
        param_types: &[String],
        parameter_modifiers: &[ParamModifier],
    ) -> Option<&MethodEntry> {
        let key = signature_key(param_types, parameter_modifiers);
        let arity = param_types.len() as u32;
        let mut visited: FxHashMap<&str, ()> = FxHashMap::default();
        let mut current = type_clr_name;
        loop {
            let entry = self.types.get(current)?;
            if let Some(found) = entry.find_method(name, arity, &key) {
                return Some(found);
            }
            if visited.insert(current, ()).is_some() {
                return None;
            }
            match entry.base_type.as_deref() {
                Some(base) => current = base,
                None => return None,
            }
        }
    }
}

fn collect_json_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_json_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "json") {
            out.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_descriptor(dir: &Path, file_name: &str, json: &str) {
        let path = dir.join(file_name);
        let mut f = fs::File::create(path).unwrap();
        f.write_all(json.as_bytes()).unwrap();
    }

    #[test]
    fn resolves_inherited_method_through_base_chain() {
        let dir = tempdir();
        write_descriptor(
            &dir,
            "base.json",
            r#"{
                "namespace": "N",
                "types": [
                    { "clrName": "N.Base", "kind": "class",
                      "methods": [ { "clrName": "M", "parameterCount": 0, "canonicalSignature": "():Void", "visibility": "public" } ] }
                ]
            }"#,
        );
        write_descriptor(
            &dir,
            "derived.json",
            r#"{
                "namespace": "N",
                "types": [
                    { "clrName": "N.Derived", "kind": "class", "baseType": { "clrName": "N.Base" } }
                ]
            }"#,
        );
        let (catalog, warnings) = Catalog::load(&[dir.clone()]).unwrap();
        assert!(warnings.is_empty());
        let found = catalog.resolve_method("N.Derived", "M", &[], &[]).unwrap();
        assert_eq!(found.clr_name, "M");
        cleanup(&dir);
    }

    #[test]
    fn cycle_guard_terminates_on_circular_base_types() {
        let dir = tempdir();
        write_descriptor(
            &dir,
            "cycle.json",
            r#"{
                "namespace": "N",
                "types": [
                    { "clrName": "N.A", "kind": "class", "baseType": { "clrName": "N.B" } },
                    { "clrName": "N.B", "kind": "class", "baseType": { "clrName": "N.A" } }
                ]
            }"#,
        );
        let (catalog, _) = Catalog::load(&[dir.clone()]).unwrap();
        assert!(catalog.resolve_method("N.A", "Missing", &[], &[]).is_none());
        cleanup(&dir);
    }

    #[test]
    fn malformed_json_is_skipped_with_a_warning() {
        let dir = tempdir();
        write_descriptor(&dir, "broken.json", "{ not valid json");
        let (catalog, warnings) = Catalog::load(&[dir.clone()]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(warnings.len(), 1);
        cleanup(&dir);
    }

    #[test]
    fn same_type_from_two_roots_is_a_fatal_error() {
        let dir_a = tempdir();
        let dir_b = tempdir();
        write_descriptor(&dir_a, "a.json", r#"{"namespace":"N","types":[{"clrName":"N.T","kind":"class"}]}"#);
        write_descriptor(&dir_b, "b.json", r#"{"namespace":"N","types":[{"clrName":"N.T","kind":"class"}]}"#);
        let result = Catalog::load(&[dir_a.clone(), dir_b.clone()]);
        assert!(result.is_err());
        cleanup(&dir_a);
        cleanup(&dir_b);
    }

    #[test]
    fn duplicate_within_one_root_is_last_writer_wins() {
        let dir = tempdir();
        write_descriptor(
            &dir,
            "a_first.json",
            r#"{"namespace":"N","types":[{"clrName":"N.T","kind":"class","methods":[{"clrName":"X","parameterCount":0,"canonicalSignature":"():Void","visibility":"public"}]}]}"#,
        );
        write_descriptor(&dir, "b_second.json", r#"{"namespace":"N","types":[{"clrName":"N.T","kind":"class"}]}"#);
        let (catalog, _) = Catalog::load(&[dir.clone()]).unwrap();
        assert_eq!(catalog.overload_count("N.T", "X", 0), 0);
        cleanup(&dir);
    }

    fn tempdir() -> PathBuf {
        let path = std::env::temp_dir().join(format!("struxc_catalog_test_{}", unique_suffix()));
        fs::create_dir_all(&path).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        let _ = fs::remove_dir_all(path);
    }

    fn unique_suffix() -> String {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        format!(
            "{}_{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        )
    }
}
