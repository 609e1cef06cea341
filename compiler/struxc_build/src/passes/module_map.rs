//! Semantic pass 3 — Module Map & Export Map (spec §4.6): per-module
//! identity (namespace, container class name) plus the resolved export
//! table used by import resolution during emission. The Module Graph
//! Builder already computes all of this (spec §4.2); this pass is a thin
//! lookup surface over that graph so the IR Builder's per-module callers
//! don't need to depend on `struxc_graph` types directly at every call site.

use struxc_graph::{ExportMap, ExportTarget, ModuleGraph, ModuleId};
use struxc_ir::Name;

#[derive(Clone, Debug)]
pub struct ModuleIdentity {
    pub namespace: String,
    pub class_name: String,
}

pub struct ModuleMap<'a> {
    graph: &'a ModuleGraph,
    export_map: &'a ExportMap,
}

impl<'a> ModuleMap<'a> {
    #[must_use]
    pub fn new(graph: &'a ModuleGraph, export_map: &'a ExportMap) -> Self {
        ModuleMap { graph, export_map }
    }

    #[must_use]
    pub fn identity_of(&self, id: ModuleId) -> ModuleIdentity {
        let module = self.graph.get(id);
        ModuleIdentity { namespace: module.namespace.clone(), class_name: module.class_name.clone() }
    }

    #[must_use]
    pub fn resolve_export(&self, module_path: &str, name: Name) -> Option<&'a ExportTarget> {
        self.export_map.resolve(module_path, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_graph::{GraphOptions, SourceLoader};
    use struxc_ir::StringInterner;

    struct OneFileLoader(String);

    impl SourceLoader for OneFileLoader {
        fn load(&self, canonical_path: &str) -> Option<String> {
            if canonical_path == "src/main" {
                Some(self.0.clone())
            } else {
                None
            }
        }
    }

    #[test]
    fn identity_of_entry_module_matches_graph() {
        let loader = OneFileLoader("export function greet() {}".to_string());
        let mut interner = StringInterner::new();
        let options = GraphOptions { source_root: "src".to_string(), root_namespace: "App".to_string() };
        let (graph, bag) = ModuleGraph::build("src/main", &loader, options, &mut interner).expect("builds");
        assert!(bag.is_empty());
        let export_map = ExportMap::build(&graph, &mut interner);
        let map = ModuleMap::new(&graph, &export_map);
        let id = graph.resolve_path("src/main").expect("entry registered");
        let identity = map.identity_of(id);
        assert_eq!(identity.namespace, "App");
        assert!(!identity.class_name.is_empty());
    }
}
