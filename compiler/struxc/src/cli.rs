//! Command-line surface (spec §6 "CLI surface").

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "struxc", about = "Ahead-of-time source-to-source compiler")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile one entry module and everything it transitively imports.
    Generate(GenerateArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OptimizeArg {
    Size,
    Speed,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Entry module path, relative to the working directory.
    pub entry: PathBuf,

    #[arg(long, default_value = "out")]
    pub output_dir: PathBuf,

    #[arg(long, default_value = "")]
    pub root_namespace: String,

    #[arg(long, default_value = ".")]
    pub source_root: PathBuf,

    /// Binding Catalog roots to load descriptors from; repeatable and/or comma-separated.
    #[arg(long = "type-roots", value_delimiter = ',')]
    pub type_roots: Vec<PathBuf>,

    /// Assembly reference to link against when no sibling project file exists; repeatable.
    #[arg(long = "lib")]
    pub libs: Vec<PathBuf>,

    #[arg(long, value_enum, default_value = "speed")]
    pub optimize: OptimizeArg,

    #[arg(long)]
    pub strip_symbols: bool,

    #[arg(long)]
    pub invariant_globalization: bool,

    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_generate_invocation() {
        let cli = Cli::parse_from(["struxc", "generate", "src/main.sl"]);
        let Command::Generate(args) = cli.command;
        assert_eq!(args.entry, PathBuf::from("src/main.sl"));
        assert_eq!(args.optimize, OptimizeArg::Speed);
        assert!(!args.strip_symbols);
    }

    #[test]
    fn parses_repeated_and_delimited_flags() {
        let cli = Cli::parse_from([
            "struxc",
            "generate",
            "src/main.sl",
            "--type-roots",
            "catalog/a,catalog/b",
            "--lib",
            "One.dll",
            "--lib",
            "Two.dll",
            "--optimize",
            "size",
            "--strip-symbols",
        ]);
        let Command::Generate(args) = cli.command;
        assert_eq!(args.type_roots, vec![PathBuf::from("catalog/a"), PathBuf::from("catalog/b")]);
        assert_eq!(args.libs, vec![PathBuf::from("One.dll"), PathBuf::from("Two.dll")]);
        assert_eq!(args.optimize, OptimizeArg::Size);
        assert!(args.strip_symbols);
    }
}
