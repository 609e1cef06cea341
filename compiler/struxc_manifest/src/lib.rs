//! The Project Manifest Generator (spec §4.8): external contract only. Given
//! a resolved build configuration and the entry module's IR, produces the
//! project file, the `Program` entry-point wrapper, and (spec §4.6 "JSON AOT
//! Registry" / supplemented ambient responsibility) the `AppJsonContext`
//! serialization context — as plain text, ready for the CLI driver to write
//! to `<outDir>/<projectName>.<projectExt>`, `<outDir>/Program.cs` and
//! `<outDir>/AppJsonContext.cs` respectively (spec §6 "Output layout").
//!
//! This crate does no filesystem I/O itself; every function here is a pure
//! `&config -> String` (or `Result<_, ManifestError>`) mapping, mirroring
//! `struxc_emit`'s own "build a value, let the caller write it" discipline.

pub mod config;
pub mod entry_point;
pub mod error;
pub mod json_context;
pub mod metadata;
pub mod project_file;

use struxc_build::passes::JsonAotRegistry;
use struxc_ir::ir::IrModule;
use struxc_ir::StringInterner;

pub use config::{BuildConfig, OptimizeFor, OutputKind, RuntimeReference};
pub use entry_point::EntryStrategy;
pub use error::ManifestError;

/// Every file the Project Manifest Generator contributes to the output
/// layout, already rendered to text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestOutput {
    pub project_file: String,
    pub program_file: String,
    /// `None` when the registry is empty — no JSON boundary was crossed
    /// anywhere in the compilation, so there is nothing to serialize AOT.
    pub json_context_file: Option<String>,
    /// Machine-readable sidecar describing the run; not read back by the
    /// compiler, offered for external tooling.
    pub metadata_file: String,
}

/// Runs the full Project Manifest Generator for one compilation: checks the
/// entry-point invariant first (spec §4.8), since a conflict there aborts
/// the whole compilation before any output is produced (spec §7 "partial
/// output is never written").
pub fn generate(
    config: &BuildConfig,
    entry_module: &IrModule,
    entry_module_path: &str,
    entry_namespace: &str,
    entry_container: &str,
    json_registry: &JsonAotRegistry,
    interner: &StringInterner,
) -> Result<ManifestOutput, ManifestError> {
    tracing::debug!(project = %config.project_name, "generating project manifest");

    let strategy = entry_point::resolve_entry_strategy(entry_module, interner, entry_module_path)?;
    let program_unit = entry_point::build_program_unit(entry_namespace, entry_container, strategy);
    let program_file = struxc_emit::printer::Printer::print_unit(&program_unit);

    let project_file = project_file::render_project_file(config);

    let json_context_file = if json_registry.types().is_empty() {
        None
    } else {
        Some(json_context::render_app_json_context(&format!("{entry_namespace}.Generated"), json_registry, interner))
    };

    tracing::info!(strategy = ?strategy, json_types = json_registry.types().len(), "project manifest generated");

    let run_metadata = metadata::build_metadata(config, strategy, json_registry.types().len());
    let metadata_file = metadata::render_metadata_json(&run_metadata).map_err(|e| ManifestError::MetadataSerialization { detail: e.to_string() })?;

    Ok(ManifestOutput { project_file, program_file, json_context_file, metadata_file })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use struxc_ir::ir::{IrStmt, IrStmtKind};
    use struxc_ir::Span;

    fn config() -> BuildConfig {
        BuildConfig {
            project_name: "App".to_string(),
            output_dir: PathBuf::from("out"),
            output_kind: OutputKind::Executable,
            target_framework: "net9.0".to_string(),
            runtime: RuntimeReference::AssemblyReferences { libs: Vec::new() },
            package_references: Vec::new(),
            strip_symbols: false,
            invariant_globalization: false,
            optimize: OptimizeFor::Speed,
            user_project_file: None,
        }
    }

    #[test]
    fn generate_produces_no_json_context_when_registry_is_empty() {
        let interner = StringInterner::new();
        let module = IrModule { statements: vec![IrStmt { kind: IrStmtKind::Empty, span: Span::DUMMY }] };
        let registry = JsonAotRegistry::build(&module, &interner);
        let out = generate(&config(), &module, "entry.ts", "App", "App__Module", &registry, &interner).unwrap();
        assert!(out.json_context_file.is_none());
        assert!(out.program_file.contains("class Program"));
        assert!(out.project_file.contains("<OutputType>Exe</OutputType>"));
    }

    #[test]
    fn generate_fails_fast_on_entry_point_conflict() {
        let mut interner = StringInterner::new();
        let main_name = interner.intern("main");
        let main_fn = IrStmt {
            kind: IrStmtKind::Function(Box::new(struxc_ir::ir::IrFunctionDecl {
                name: Some(main_name),
                generics: Vec::new(),
                params: Vec::new(),
                return_type: None,
                body: Vec::new(),
                is_async: false,
                is_generator: false,
                is_bidirectional_generator: false,
                is_exported: true,
                span: Span::DUMMY,
            })),
            span: Span::DUMMY,
        };
        let top_level = IrStmt { kind: IrStmtKind::Empty, span: Span::DUMMY };
        let module = IrModule { statements: vec![main_fn, top_level] };
        let registry = JsonAotRegistry::build(&module, &interner);
        let result = generate(&config(), &module, "entry.ts", "App", "App__Module", &registry, &interner);
        assert!(matches!(result, Err(ManifestError::EntryPointConflict { .. })));
    }
}
