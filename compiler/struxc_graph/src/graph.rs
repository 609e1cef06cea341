//! Module Graph Builder (spec §4.2): BFS discovery from an entry file,
//! canonicalization, namespace/class-name assignment, and collision
//! detection. Filesystem I/O itself is out of scope (spec §1) — callers
//! supply a [`SourceLoader`] that turns a canonical path into source text.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use struxc_diagnostic::{Diagnostic, DiagnosticBag, ErrorCode};
use struxc_ir::{Span, StringInterner};

use crate::error::GraphError;
use crate::ids::ModuleId;
use crate::module::{ImportTarget, Module, ResolvedImport};
use crate::path::{canonicalize_path, compute_class_name, compute_namespace, resolve_import_source, ImportSource};

/// Supplies source text for a canonical module path. Implemented by the
/// `struxc` binary over real files; tests can hand in an in-memory map.
pub trait SourceLoader {
    fn load(&self, canonical_path: &str) -> Option<String>;
}

pub struct GraphOptions {
    pub source_root: String,
    pub root_namespace: String,
}

pub struct ModuleGraph {
    modules: Vec<Module>,
    path_to_id: FxHashMap<String, ModuleId>,
    options: GraphOptions,
}

impl ModuleGraph {
    #[must_use]
    pub fn get(&self, id: ModuleId) -> &Module {
        &self.modules[id.raw() as usize]
    }

    #[must_use]
    pub fn resolve_path(&self, canonical_path: &str) -> Option<ModuleId> {
        self.path_to_id.get(canonical_path).copied()
    }

    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Resolve a re-export's `source` string against the importing module's
    /// directory, returning the target's canonical path if it's local to
    /// this graph (used by the Export Map's re-export compaction pass).
    #[must_use]
    pub fn resolve_import_source_path(&self, from_module: &str, source: &str) -> Option<String> {
        let dir = dirname(from_module);
        match resolve_import_source(&dir, source, &self.options.source_root) {
            ImportSource::Local(path) => Some(path),
            ImportSource::External => None,
        }
    }

    pub fn build(
        entry_path: &str,
        loader: &dyn SourceLoader,
        options: GraphOptions,
        interner: &mut StringInterner,
    ) -> Result<(ModuleGraph, DiagnosticBag), GraphError> {
        let entry_canonical = canonicalize_path(entry_path);

        let mut modules: Vec<Module> = Vec::new();
        let mut path_to_id: FxHashMap<String, ModuleId> = FxHashMap::default();
        // Pending local import targets per module, resolved to `ModuleId`
        // only after every reachable module has been discovered.
        let mut pending: Vec<Vec<(usize, ImportSource)>> = Vec::new();

        let mut queue: VecDeque<String> = VecDeque::new();
        let mut enqueued: FxHashMap<String, ()> = FxHashMap::default();
        queue.push_back(entry_canonical.clone());
        enqueued.insert(entry_canonical, ());

        while let Some(path) = queue.pop_front() {
            if path_to_id.contains_key(&path) {
                continue;
            }
            let source = loader.load(&path).ok_or_else(|| GraphError::EntryNotFound(path.clone()))?;
            let ast =
                struxc_parse::parse_module(&source, interner).map_err(|e| GraphError::Parse { path: path.clone(), source: e })?;

            let id = ModuleId::from_raw(modules.len() as u32);
            let namespace = compute_namespace(&options.root_namespace, &path, &options.source_root);
            let class_name = compute_class_name(&path);
            let dir = dirname(&path);

            let mut import_sources = Vec::with_capacity(ast.imports.len());
            for decl in &ast.imports {
                let resolved = resolve_import_source(&dir, &decl.source, &options.source_root);
                if let ImportSource::Local(local_path) = &resolved {
                    if !path_to_id.contains_key(local_path) && !enqueued.contains_key(local_path) {
                        enqueued.insert(local_path.clone(), ());
                        queue.push_back(local_path.clone());
                    }
                }
                import_sources.push(resolved);
            }

            path_to_id.insert(path.clone(), id);
            pending.push(import_sources.into_iter().enumerate().map(|(i, s)| (i, s)).collect());
            modules.push(Module { id, canonical_path: path, namespace, class_name, ast, imports: Vec::new() });
        }

        for (module, pending_imports) in modules.iter_mut().zip(pending.into_iter()) {
            let mut imports = Vec::with_capacity(pending_imports.len());
            for (idx, source) in pending_imports {
                let target = match source {
                    ImportSource::External => ImportTarget::External,
                    ImportSource::Local(path) => match path_to_id.get(&path) {
                        Some(id) => ImportTarget::Local(*id),
                        None => return Err(GraphError::EntryNotFound(path)),
                    },
                };
                imports.push(ResolvedImport { decl: module.ast.imports[idx].clone(), target });
            }
            module.imports = imports;
        }

        let mut bag = DiagnosticBag::new();
        detect_collisions(&modules, &mut bag);

        Ok((ModuleGraph { modules, path_to_id, options }, bag))
    }
}

/// Any two modules sharing `(namespace, class_name)` after normalization
/// collide (TSN9001); every module but the first-discovered in each group
/// gets a diagnostic naming both files.
fn detect_collisions(modules: &[Module], bag: &mut DiagnosticBag) {
    let mut seen: FxHashMap<(String, String), String> = FxHashMap::default();
    for module in modules {
        let key = (module.namespace.clone(), module.class_name.clone());
        if let Some(first_path) = seen.get(&key) {
            bag.push(Diagnostic::error(
                ErrorCode::Tsn9001,
                module.canonical_path.clone(),
                1,
                Span::DUMMY,
                format!(
                    "module '{}' and module '{}' both normalize to namespace '{}' class '{}'",
                    first_path, module.canonical_path, module.namespace, module.class_name
                ),
            ));
        } else {
            seen.insert(key, module.canonical_path.clone());
        }
    }
}

fn dirname(canonical_path: &str) -> String {
    match canonical_path.rsplit_once('/') {
        Some((dir, _)) => dir.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    struct MapLoader {
        files: HashMap<String, String>,
    }

    impl SourceLoader for MapLoader {
        fn load(&self, canonical_path: &str) -> Option<String> {
            self.files.get(canonical_path).cloned()
        }
    }

    fn options() -> GraphOptions {
        GraphOptions { source_root: "src".to_string(), root_namespace: "App".to_string() }
    }

    #[test]
    fn discovers_transitive_local_imports() {
        let loader = MapLoader {
            files: HashMap::from([
                ("src/main".to_string(), "import { helper } from './util';".to_string()),
                ("src/util".to_string(), "export function helper() {}".to_string()),
            ]),
        };
        let mut interner = StringInterner::new();
        let (graph, bag) = ModuleGraph::build("src/main", &loader, options(), &mut interner).expect("builds");
        assert_eq!(graph.len(), 2);
        assert!(bag.is_empty());
        assert!(graph.resolve_path("src/util").is_some());
    }

    #[test]
    fn missing_entry_is_fatal() {
        let loader = MapLoader { files: HashMap::new() };
        let mut interner = StringInterner::new();
        let result = ModuleGraph::build("src/main", &loader, options(), &mut interner);
        assert!(matches!(result, Err(GraphError::EntryNotFound(_))));
    }

    #[test]
    fn colliding_class_names_emit_tsn9001() {
        let loader = MapLoader {
            files: HashMap::from([
                ("src/main".to_string(), "import { a } from './api-client'; import { b } from './apiclient';".to_string()),
                ("src/api-client".to_string(), "export function a() {}".to_string()),
                ("src/apiclient".to_string(), "export function b() {}".to_string()),
            ]),
        };
        let mut interner = StringInterner::new();
        let (_graph, bag) = ModuleGraph::build("src/main", &loader, options(), &mut interner).expect("builds");
        assert!(bag.has_errors());
    }
}
