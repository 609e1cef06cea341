//! End-to-end coverage of the `generate` pipeline (spec §8 scenario 4 and
//! the §6 CLI exit-code contract), driving [`struxc::pipeline::run`]
//! directly rather than spawning the compiled binary.

use std::fs;
use std::path::Path;

use struxc_catalog::Catalog;
use struxc_manifest::{BuildConfig, OptimizeFor, OutputKind, RuntimeReference};
use struxc::pipeline::{self, PipelineError, PipelineInputs};

fn base_config(project_name: &str) -> BuildConfig {
    BuildConfig {
        project_name: project_name.to_string(),
        output_dir: std::path::PathBuf::from("out"),
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

fn write_entry(dir: &Path, relative: &str, source: &str) -> std::path::PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, source).unwrap();
    path
}

#[test]
fn entry_exporting_main_and_top_level_code_fails_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    write_entry(dir.path(), "main.sl", "export function main(): void {}\nmain();\n");

    let (catalog, _warnings) = Catalog::load(&[]).unwrap();
    let inputs = PipelineInputs {
        cwd: dir.path(),
        entry: Path::new("main.sl"),
        source_root: Path::new("."),
        root_namespace: "App",
        catalog,
        build_config: base_config("App"),
    };
    let (result, _bag) = pipeline::run(&inputs);

    assert!(matches!(result, Err(PipelineError::Manifest(_))));
}

#[test]
fn missing_entry_file_is_a_user_error() {
    let dir = tempfile::tempdir().unwrap();
    let (catalog, _warnings) = Catalog::load(&[]).unwrap();
    let inputs = PipelineInputs {
        cwd: dir.path(),
        entry: Path::new("does-not-exist.sl"),
        source_root: Path::new("."),
        root_namespace: "App",
        catalog,
        build_config: base_config("App"),
    };
    let (result, bag) = pipeline::run(&inputs);

    assert!(matches!(result, Err(PipelineError::EntryNotFound(_))));
    assert!(bag.is_empty());
}
