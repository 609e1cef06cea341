//! Builds the per-module [`ImportBindings`] the Binding Layer needs from a
//! graph module's already-resolved [`ResolvedImport`]s (spec §4.2 resolves
//! import *paths*; mapping a bound local name to its [`ImportOrigin`] is
//! left to this binary, per `struxc_binding::imports`'s own doc comment).
//!
//! External imports are assumed to name their CLR namespace directly in
//! the `source` string (matching the Binding Catalog descriptor's own
//! `"namespace"` + fully-qualified `"clrName"` shape), so a named
//! specifier's CLR name is `format!("{source}.{imported}")`.

use struxc_binding::{ImportBindings, ImportOrigin};
use struxc_graph::{ImportTarget, Module, ModuleGraph};
use struxc_ir::ast::ImportClause;
use struxc_ir::StringInterner;

#[must_use]
pub fn build_import_bindings(module: &Module, graph: &ModuleGraph, interner: &StringInterner) -> ImportBindings {
    let mut bindings = ImportBindings::new();

    for resolved in &module.imports {
        let local_module_path = match resolved.target {
            ImportTarget::Local(id) => Some(graph.get(id).canonical_path.clone()),
            ImportTarget::External => None,
        };

        match &resolved.decl.clause {
            ImportClause::Default(local) => {
                bindings.bind(*local, origin_for(local_module_path.as_deref(), &resolved.decl.source, "default"));
            }
            ImportClause::Namespace(local) => {
                bindings.bind(*local, origin_for(local_module_path.as_deref(), &resolved.decl.source, "*"));
            }
            ImportClause::Named(specifiers) => {
                for spec in specifiers {
                    let imported_name = interner.resolve(spec.imported);
                    bindings.bind(spec.local, origin_for(local_module_path.as_deref(), &resolved.decl.source, imported_name));
                }
            }
        }
    }

    bindings
}

fn origin_for(local_module_path: Option<&str>, source: &str, imported_name: &str) -> ImportOrigin {
    match local_module_path {
        Some(path) => ImportOrigin::Local { module_path: path.to_string() },
        None => ImportOrigin::External { clr_name: format!("{source}.{imported_name}") },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use struxc_graph::{GraphOptions, SourceLoader};

    struct MapLoader {
        files: HashMap<String, String>,
    }

    impl SourceLoader for MapLoader {
        fn load(&self, canonical_path: &str) -> Option<String> {
            self.files.get(canonical_path).cloned()
        }
    }

    #[test]
    fn local_import_binds_to_the_target_module_path() {
        let loader = MapLoader {
            files: HashMap::from([
                ("src/main".to_string(), "import { helper } from './util';".to_string()),
                ("src/util".to_string(), "export function helper() {}".to_string()),
            ]),
        };
        let mut interner = StringInterner::new();
        let options = GraphOptions { source_root: "src".to_string(), root_namespace: "App".to_string() };
        let (graph, bag) = ModuleGraph::build("src/main", &loader, options, &mut interner).expect("builds");
        assert!(bag.is_empty());

        let main_id = graph.resolve_path("src/main").expect("main module present");
        let main = graph.get(main_id);
        let bindings = build_import_bindings(main, &graph, &interner);

        let helper = interner.intern("helper");
        match bindings.lookup(helper) {
            Some(ImportOrigin::Local { module_path }) => assert_eq!(module_path, "src/util"),
            other => panic!("expected a local origin, got {other:?}"),
        }
    }

    #[test]
    fn external_import_derives_clr_name_from_source_and_specifier() {
        let loader = MapLoader {
            files: HashMap::from([("src/main".to_string(), "import { List } from 'System.Collections.Generic';".to_string())]),
        };
        let mut interner = StringInterner::new();
        let options = GraphOptions { source_root: "src".to_string(), root_namespace: "App".to_string() };
        let (graph, bag) = ModuleGraph::build("src/main", &loader, options, &mut interner).expect("builds");
        assert!(bag.is_empty());

        let main_id = graph.resolve_path("src/main").expect("main module present");
        let main = graph.get(main_id);
        let bindings = build_import_bindings(main, &graph, &interner);

        let list = interner.intern("List");
        match bindings.lookup(list) {
            Some(ImportOrigin::External { clr_name }) => assert_eq!(clr_name, "System.Collections.Generic.List"),
            other => panic!("expected an external origin, got {other:?}"),
        }
    }
}
