//! struxc: ahead-of-time source-to-source compiler (spec §1-§7).
//!
//! Wires the Binding Catalog, Module Graph Builder, Binding Layer, IR
//! Builder, Semantic Passes, Emitter and Project Manifest Generator crates
//! into one `generate` pipeline. [`main`](../bin.struxc.html) is a thin
//! wrapper: argument parsing, exit-code mapping, and process setup live
//! there; everything that can be exercised without a process boundary
//! lives here.

pub mod cli;
pub mod fs_loader;
pub mod generate;
pub mod import_binding;
pub mod output;
pub mod pipeline;
pub mod tracing_setup;
