//! The Export Map (spec §3 Export, §4.2 step 6): `(modulePath, exportedName)
//! → (sourceModulePath, sourceName)`, with re-export chains compacted to a
//! fixed point bounded at 10 iterations.

use rustc_hash::FxHashMap;
use struxc_ir::ast::{BindingPattern, ExportDecl, ReExportKind, Stmt, StmtKind};
use struxc_ir::{Name, StringInterner};

use crate::graph::ModuleGraph;

const MAX_HOPS: u32 = 10;

/// Sentinel exported name for `export * as ns from "m"` — the whole
/// namespace is bound under one local name rather than expanded per member.
const NAMESPACE_SENTINEL: &str = "*";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExportKey {
    pub module_path: String,
    pub name: Name,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportTarget {
    pub module_path: String,
    pub name: Name,
}

#[derive(Default)]
pub struct ExportMap {
    entries: FxHashMap<ExportKey, ExportTarget>,
}

impl ExportMap {
    #[must_use]
    pub fn resolve(&self, module_path: &str, name: Name) -> Option<&ExportTarget> {
        self.entries.get(&ExportKey { module_path: module_path.to_string(), name })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(graph: &ModuleGraph, interner: &mut StringInterner) -> ExportMap {
        let mut map = ExportMap::default();
        let namespace_sentinel = interner.intern(NAMESPACE_SENTINEL);
        let default_name = interner.intern("default");

        for module in graph.modules() {
            for stmt in &module.ast.statements {
                if let StmtKind::Export(decl) = &stmt.kind {
                    collect_direct(&module.canonical_path, decl, default_name, &mut map.entries);
                }
            }
        }

        for _ in 0..MAX_HOPS {
            let mut changed = false;
            let additions = compact_one_pass(graph, &map, namespace_sentinel);
            for (key, target) in additions {
                if map.entries.insert(key, target).is_none() {
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        map
    }
}

fn collect_direct(
    module_path: &str,
    decl: &ExportDecl,
    default_name: Name,
    entries: &mut FxHashMap<ExportKey, ExportTarget>,
) {
    match decl {
        ExportDecl::Inline(stmt) => {
            for name in declared_names(stmt) {
                entries.insert(
                    ExportKey { module_path: module_path.to_string(), name },
                    ExportTarget { module_path: module_path.to_string(), name },
                );
            }
        }
        ExportDecl::Named { specifiers, .. } => {
            for spec in specifiers {
                entries.insert(
                    ExportKey { module_path: module_path.to_string(), name: spec.local },
                    ExportTarget { module_path: module_path.to_string(), name: spec.imported },
                );
            }
        }
        ExportDecl::Default(_) => {
            entries.insert(
                ExportKey { module_path: module_path.to_string(), name: default_name },
                ExportTarget { module_path: module_path.to_string(), name: default_name },
            );
        }
        // `ReExport` needs the source module's canonical path, which is only
        // known via the import-resolution rules applied to its `source`
        // string; handled in `compact_one_pass` where the graph is available.
        ExportDecl::ReExport { .. } => {}
    }
}

fn compact_one_pass(
    graph: &ModuleGraph,
    map: &ExportMap,
    namespace_sentinel: Name,
) -> Vec<(ExportKey, ExportTarget)> {
    let mut additions = Vec::new();
    for module in graph.modules() {
        for stmt in &module.ast.statements {
            let StmtKind::Export(ExportDecl::ReExport { source, specifiers, .. }) = &stmt.kind else {
                continue;
            };
            let Some(source_path) = graph.resolve_import_source_path(&module.canonical_path, source) else {
                continue;
            };
            match specifiers {
                ReExportKind::Named(specs) => {
                    for spec in specs {
                        let exported = ExportKey { module_path: module.canonical_path.clone(), name: spec.local };
                        let resolved = map
                            .resolve(&source_path, spec.imported)
                            .cloned()
                            .unwrap_or(ExportTarget { module_path: source_path.clone(), name: spec.imported });
                        additions.push((exported, resolved));
                    }
                }
                ReExportKind::All => {
                    for (key, target) in map.entries_for_module(&source_path) {
                        let exported = ExportKey { module_path: module.canonical_path.clone(), name: key.name };
                        additions.push((exported, target.clone()));
                    }
                }
                ReExportKind::AllAs(alias) => {
                    let exported = ExportKey { module_path: module.canonical_path.clone(), name: *alias };
                    additions.push((
                        exported,
                        ExportTarget { module_path: source_path.clone(), name: namespace_sentinel },
                    ));
                }
            }
        }
    }
    additions
}

impl ExportMap {
    fn entries_for_module<'a>(&'a self, module_path: &'a str) -> impl Iterator<Item = (&'a ExportKey, &'a ExportTarget)> {
        self.entries.iter().filter(move |(k, _)| k.module_path == module_path)
    }
}

fn declared_names(stmt: &Stmt) -> Vec<Name> {
    match &stmt.kind {
        StmtKind::Function(decl) => decl.name.into_iter().collect(),
        StmtKind::Class(decl) => vec![decl.name],
        StmtKind::Interface(decl) => vec![decl.name],
        StmtKind::Enum(decl) => vec![decl.name],
        StmtKind::TypeAlias(decl) => vec![decl.name],
        StmtKind::VarDecl { pattern, .. } => pattern_names(pattern),
        _ => Vec::new(),
    }
}

fn pattern_names(pattern: &BindingPattern) -> Vec<Name> {
    match pattern {
        BindingPattern::Identifier { name, .. } => vec![*name],
        BindingPattern::Array { elements, rest, .. } => {
            let mut names: Vec<Name> = elements.iter().flatten().flat_map(pattern_names).collect();
            if let Some(rest) = rest {
                names.extend(pattern_names(rest));
            }
            names
        }
        BindingPattern::Object { properties, rest, .. } => {
            let mut names: Vec<Name> = properties.iter().flat_map(|p| pattern_names(&p.value)).collect();
            if let Some(rest) = rest {
                names.extend(pattern_names(rest));
            }
            names
        }
    }
}
