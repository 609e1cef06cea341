//! Module Graph Builder (spec §4.2): resolves an entry file, transitively
//! discovers its local imports, canonicalizes paths, assigns each module a
//! target namespace and container class name, detects name collisions, and
//! builds the Export Map used to follow re-export chains.

mod error;
mod export_map;
mod graph;
mod ids;
mod module;
mod path;

pub use error::GraphError;
pub use export_map::{ExportKey, ExportMap, ExportTarget};
pub use graph::{GraphOptions, ModuleGraph, SourceLoader};
pub use ids::ModuleId;
pub use module::{ImportTarget, Module, ResolvedImport};
pub use path::{canonicalize_path, compute_class_name, compute_namespace, resolve_import_source, ImportSource, SOURCE_EXT};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use struxc_ir::StringInterner;

    struct MapLoader {
        files: HashMap<String, String>,
    }

    impl SourceLoader for MapLoader {
        fn load(&self, canonical_path: &str) -> Option<String> {
            self.files.get(canonical_path).cloned()
        }
    }

    #[test]
    fn export_map_follows_named_reexport_chain() {
        let loader = MapLoader {
            files: HashMap::from([
                ("src/main".to_string(), "import { helper } from './facade';".to_string()),
                ("src/facade".to_string(), "export { helper } from './impl';".to_string()),
                ("src/impl".to_string(), "export function helper() {}".to_string()),
            ]),
        };
        let mut interner = StringInterner::new();
        let options = GraphOptions { source_root: "src".to_string(), root_namespace: "App".to_string() };
        let (graph, bag) = ModuleGraph::build("src/main", &loader, options, &mut interner).expect("builds");
        assert!(bag.is_empty());

        let export_map = ExportMap::build(&graph, &mut interner);
        let helper_name = interner.intern("helper");
        let resolved = export_map.resolve("src/facade", helper_name).expect("resolves through the chain");
        assert_eq!(resolved.module_path, "src/impl");
        assert_eq!(resolved.name, helper_name);
    }
}
