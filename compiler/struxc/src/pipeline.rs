//! Core compilation pipeline: Binding Catalog → Module Graph → (per module)
//! Binding Layer → IR Builder → Semantic Passes → Emitter → Project Manifest
//! Generator. Grounded on `ori_compiler::pipeline::compile_and_run`'s
//! phase-sequenced, early-return-with-diagnostics-on-failure shape.
//!
//! No filesystem writes happen here (spec §7 "partial output is never
//! written" — the caller commits [`PipelineOutput`] to disk only once this
//! returns `Ok`).

use std::path::Path;

use struxc_binding::BindingLayer;
use struxc_build::passes::{self, ModuleBuildOutput};
use struxc_catalog::Catalog;
use struxc_diagnostic::DiagnosticBag;
use struxc_emit::backend::CompilationUnit;
use struxc_graph::{canonicalize_path, ExportMap, GraphOptions, ModuleGraph, ModuleId, SourceLoader};
use struxc_ir::StringInterner;
use struxc_manifest::{BuildConfig, ManifestError, ManifestOutput};
use struxc_types::{AwaitableNames, TypeRegistry};

use crate::fs_loader::FsLoader;
use crate::import_binding::build_import_bindings;

pub struct EmittedModule {
    pub canonical_path: String,
    pub source: String,
}

pub struct PipelineOutput {
    pub modules: Vec<EmittedModule>,
    pub manifest: ManifestOutput,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("entry file not found: {0}")]
    EntryNotFound(String),
    #[error(transparent)]
    Graph(#[from] struxc_graph::GraphError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("compilation failed with {0} diagnostic(s)")]
    Diagnostics(usize),
}

pub struct PipelineInputs<'a> {
    /// Base directory every canonical module path is resolved against on
    /// disk (the process's working directory for the real CLI).
    pub cwd: &'a Path,
    /// Entry module path, relative to `cwd`.
    pub entry: &'a Path,
    pub source_root: &'a Path,
    pub root_namespace: &'a str,
    pub catalog: Catalog,
    pub build_config: BuildConfig,
}

/// Runs every phase in order, stopping at the first phase boundary that
/// produced an error-severity diagnostic (spec §3 Lifecycle) or a fatal
/// [`PipelineError`]. Returns the full diagnostic bag alongside the result
/// so the caller can still print warnings on a successful run.
pub fn run(inputs: &PipelineInputs<'_>) -> (Result<PipelineOutput, PipelineError>, DiagnosticBag) {
    let mut interner = StringInterner::new();
    let mut bag = DiagnosticBag::new();

    let entry_display = inputs.entry.display().to_string();
    if !inputs.cwd.join(inputs.entry).exists() {
        return (Err(PipelineError::EntryNotFound(entry_display)), bag);
    }

    let loader = FsLoader::new(inputs.cwd);
    let options = GraphOptions {
        source_root: inputs.source_root.display().to_string(),
        root_namespace: inputs.root_namespace.to_string(),
    };

    tracing::debug!(entry = %entry_display, "building module graph");
    let (graph, graph_diagnostics) = match ModuleGraph::build(&entry_display, &loader, options, &mut interner) {
        Ok(pair) => pair,
        Err(e) => return (Err(PipelineError::Graph(e)), bag),
    };
    bag.extend(graph_diagnostics.into_vec());
    if bag.has_errors() {
        return (Err(PipelineError::Diagnostics(bag.len())), bag);
    }

    let export_map = ExportMap::build(&graph, &mut interner);

    let types = TypeRegistry::new();
    let awaitable = AwaitableNames::new(&mut interner);

    let mut built: Vec<(ModuleId, ModuleBuildOutput, String)> = Vec::with_capacity(graph.len());
    for module in graph.modules() {
        let imports = build_import_bindings(module, &graph, &interner);
        let binding = BindingLayer::resolve_module(&module.ast, &inputs.catalog, &imports, &interner);

        let file = module.canonical_path.clone();
        let source = loader.load(&file).unwrap_or_default();

        let ir = struxc_build::build_module(&module.ast, &binding, &inputs.catalog, &types, &awaitable, &mut interner, &mut bag, &file, &source);
        let output = passes::run_all(ir, module.id, &graph, &export_map, &interner, &file, &source, &mut bag);
        built.push((module.id, output, source));
    }

    if bag.has_errors() {
        return (Err(PipelineError::Diagnostics(bag.len())), bag);
    }

    tracing::debug!(module_count = built.len(), "emitting compilation units");
    let mut units: Vec<(ModuleId, CompilationUnit)> = Vec::with_capacity(built.len());
    for (id, output, source) in &built {
        let module = graph.get(*id);
        let unit = struxc_emit::assemble_module(&output.module, &module.namespace, &module.class_name, &interner, &mut bag, &module.canonical_path, source);
        units.push((*id, unit));
    }

    if bag.has_errors() {
        return (Err(PipelineError::Diagnostics(bag.len())), bag);
    }

    let emitted: Vec<EmittedModule> = units
        .iter()
        .map(|(id, unit)| EmittedModule {
            canonical_path: graph.get(*id).canonical_path.clone(),
            source: struxc_emit::printer::Printer::print_unit(unit),
        })
        .collect();

    let entry_id = match graph.resolve_path(&canonicalize_path(&entry_display)) {
        Some(id) => id,
        None => return (Err(PipelineError::EntryNotFound(entry_display)), bag),
    };
    let entry_module = graph.get(entry_id);
    let Some(entry_build) = built.iter().find(|(id, _, _)| *id == entry_id).map(|(_, out, _)| out) else {
        return (Err(PipelineError::EntryNotFound(entry_display)), bag);
    };

    tracing::debug!("generating project manifest");
    let manifest = match struxc_manifest::generate(
        &inputs.build_config,
        &entry_build.module,
        &entry_module.canonical_path,
        &entry_module.namespace,
        &entry_module.class_name,
        &entry_build.json_registry,
        &interner,
    ) {
        Ok(m) => m,
        Err(e) => return (Err(PipelineError::Manifest(e)), bag),
    };

    (Ok(PipelineOutput { modules: emitted, manifest }), bag)
}
