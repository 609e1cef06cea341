//! struxc: ahead-of-time source-to-source compiler CLI (spec §6).

use std::process::ExitCode;

use clap::Parser;
use struxc::cli::{Cli, Command};
use struxc::{generate, tracing_setup};

fn main() -> ExitCode {
    tracing_setup::init();
    let cli = Cli::parse();
    let Command::Generate(args) = cli.command;
    ExitCode::from(generate::run(args))
}
