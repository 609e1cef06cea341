//! The `generate` subcommand: wires parsed CLI flags into a
//! [`crate::pipeline::PipelineInputs`], runs the pipeline, prints
//! diagnostics, and commits output to disk on success.

use std::path::{Path, PathBuf};

use struxc_catalog::Catalog;
use struxc_diagnostic::emitter::terminal::TerminalEmitter;
use struxc_manifest::{BuildConfig, OptimizeFor, OutputKind, RuntimeReference};

use crate::cli::{GenerateArgs, OptimizeArg};
use crate::output;
use crate::pipeline::{self, PipelineError, PipelineInputs};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_USER_ERROR: u8 = 1;
pub const EXIT_COMPILATION_ERROR: u8 = 2;

pub fn run(args: GenerateArgs) -> u8 {
    let (catalog, warnings) = match Catalog::load(&args.type_roots) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("struxc: {e}");
            return EXIT_USER_ERROR;
        }
    };
    for warning in &warnings {
        tracing::warn!(%warning, "catalog load warning");
    }

    for lib in &args.libs {
        if !lib.exists() {
            eprintln!("struxc: missing library: {}", lib.display());
            return EXIT_USER_ERROR;
        }
    }

    let project_name = args.entry.file_stem().and_then(|s| s.to_str()).unwrap_or("App").to_string();

    let runtime = match find_sibling_project(&args.output_dir) {
        Some(path) => RuntimeReference::ProjectReference { path },
        None => RuntimeReference::AssemblyReferences { libs: args.libs.clone() },
    };

    let build_config = BuildConfig {
        project_name: project_name.clone(),
        output_dir: args.output_dir.clone(),
        output_kind: OutputKind::Executable,
        target_framework: "net9.0".to_string(),
        runtime,
        package_references: Vec::new(),
        strip_symbols: args.strip_symbols,
        invariant_globalization: args.invariant_globalization,
        optimize: match args.optimize {
            OptimizeArg::Size => OptimizeFor::Size,
            OptimizeArg::Speed => OptimizeFor::Speed,
        },
        user_project_file: None,
    };

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("struxc: could not read working directory: {e}");
            return EXIT_USER_ERROR;
        }
    };

    let inputs = PipelineInputs {
        cwd: &cwd,
        entry: &args.entry,
        source_root: &args.source_root,
        root_namespace: &args.root_namespace,
        catalog,
        build_config,
    };

    let (result, bag) = pipeline::run(&inputs);

    let mut emitter = TerminalEmitter::new(std::io::stderr());
    let _ = emitter.emit_all(&bag);

    match result {
        Ok(compiled) => {
            if let Err(e) = output::write(&args.output_dir, &project_name, OutputKind::Executable, &compiled) {
                eprintln!("struxc: failed to write output: {e}");
                return EXIT_USER_ERROR;
            }
            EXIT_SUCCESS
        }
        Err(PipelineError::Diagnostics(_)) => EXIT_COMPILATION_ERROR,
        Err(other) => {
            eprintln!("struxc: {other}");
            EXIT_USER_ERROR
        }
    }
}

fn find_sibling_project(output_dir: &Path) -> Option<PathBuf> {
    let parent = output_dir.parent()?;
    let entries = std::fs::read_dir(parent).ok()?;
    entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .find(|p| p.extension().and_then(|e| e.to_str()) == Some("csproj"))
}
