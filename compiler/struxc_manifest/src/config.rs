//! The resolved build configuration the Project Manifest Generator emits
//! from (spec §4.8). Built by the CLI driver from the `generate` subcommand's
//! flags (spec §6); kept as a plain struct here so this crate stays
//! independent of `clap`.

use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    Executable,
    Library,
    ConsoleApp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptimizeFor {
    Size,
    Speed,
}

/// Either a sibling project to reference, or a flat set of assembly
/// references with relative hint paths (spec §4.8 "runtime path").
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeReference {
    ProjectReference { path: PathBuf },
    AssemblyReferences { libs: Vec<PathBuf> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    pub project_name: String,
    pub output_dir: PathBuf,
    pub output_kind: OutputKind,
    pub target_framework: String,
    pub runtime: RuntimeReference,
    /// Package references beyond the runtime reference (framework/package
    /// references named in spec §4.8); kept as plain `(name, version)`
    /// pairs since this crate has no need to model NuGet's richer model.
    pub package_references: Vec<(String, String)>,
    pub strip_symbols: bool,
    pub invariant_globalization: bool,
    pub optimize: OptimizeFor,
    /// If the user supplied a project file at the project root, its
    /// contents are copied verbatim instead of generating one.
    pub user_project_file: Option<String>,
}
