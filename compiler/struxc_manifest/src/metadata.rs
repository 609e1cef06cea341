//! Machine-readable manifest companion data (SPEC_FULL ambient-stack note:
//! `serde`/`serde_json` for "the project manifest's machine-readable
//! companion data"). A small sidecar describing what was generated, meant
//! for tooling that wants to know the shape of a run's output without
//! re-parsing the project file — not consumed by the compiler itself.

use serde::Serialize;

use crate::config::{BuildConfig, OptimizeFor, OutputKind};
use crate::entry_point::EntryStrategy;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestMetadata<'a> {
    pub project_name: &'a str,
    pub target_framework: &'a str,
    pub output_kind: &'static str,
    pub optimize: &'static str,
    pub strip_symbols: bool,
    pub invariant_globalization: bool,
    pub entry_strategy: &'static str,
    pub json_serializable_type_count: usize,
}

#[must_use]
pub fn build_metadata<'a>(config: &'a BuildConfig, strategy: EntryStrategy, json_type_count: usize) -> ManifestMetadata<'a> {
    ManifestMetadata {
        project_name: &config.project_name,
        target_framework: &config.target_framework,
        output_kind: match config.output_kind {
            OutputKind::Executable => "executable",
            OutputKind::Library => "library",
            OutputKind::ConsoleApp => "console-app",
        },
        optimize: match config.optimize {
            OptimizeFor::Size => "size",
            OptimizeFor::Speed => "speed",
        },
        strip_symbols: config.strip_symbols,
        invariant_globalization: config.invariant_globalization,
        entry_strategy: match strategy {
            EntryStrategy::CallMain => "call-main",
            EntryStrategy::CallTopLevel => "call-top-level",
            EntryStrategy::Empty => "empty",
        },
        json_serializable_type_count: json_type_count,
    }
}

/// Serializes to pretty-printed JSON; the only failure mode is a writer
/// error, which can't happen writing into a `String`, so this never
/// actually returns `Err` in practice but keeps the `Result` contract
/// `serde_json` exposes rather than asserting internally.
pub fn render_metadata_json(metadata: &ManifestMetadata<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use struxc_ir::ir::{IrModule, IrStmt, IrStmtKind};
    use struxc_ir::Span;

    #[test]
    fn renders_expected_fields() {
        let config = BuildConfig {
            project_name: "App".to_string(),
            output_dir: PathBuf::from("out"),
            output_kind: OutputKind::Executable,
            target_framework: "net9.0".to_string(),
            runtime: crate::config::RuntimeReference::AssemblyReferences { libs: Vec::new() },
            package_references: Vec::new(),
            strip_symbols: true,
            invariant_globalization: false,
            optimize: OptimizeFor::Size,
            user_project_file: None,
        };
        let _module = IrModule { statements: vec![IrStmt { kind: IrStmtKind::Empty, span: Span::DUMMY }] };
        let metadata = build_metadata(&config, EntryStrategy::CallTopLevel, 3);
        let json = render_metadata_json(&metadata).unwrap();
        assert!(json.contains("\"projectName\": \"App\""));
        assert!(json.contains("\"entryStrategy\": \"call-top-level\""));
        assert!(json.contains("\"jsonSerializableTypeCount\": 3"));
    }
}
