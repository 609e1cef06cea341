//! The IR Builder and Semantic Passes (spec §4.5, §4.6).
//!
//! Lowers one module's source AST to IR once the Binding Layer has
//! resolved it, then runs the fixed-order semantic passes that compute the
//! auxiliary indices the Emitter depends on (local/public type indices,
//! the naming-collision check, the numeric proof pass, the JSON AOT
//! registry).

mod context;
pub mod convert;
mod narrow;
mod numeric;
pub mod passes;
mod soundness;

pub use context::BuildContext;
pub use convert::{convert_expr, convert_module, convert_type};
pub use passes::ModuleBuildOutput;

use struxc_binding::BindingLayer;
use struxc_catalog::Catalog;
use struxc_diagnostic::DiagnosticBag;
use struxc_ir::ast::SourceModule;
use struxc_ir::ir::IrModule;
use struxc_ir::StringInterner;
use struxc_types::{AwaitableNames, TypeRegistry};

/// Lowers one module to IR and runs its soundness gate. This is the IR
/// Builder proper (spec §4.5); the Semantic Passes (spec §4.6) run
/// afterwards, across the whole module set, via [`passes::run_all`].
pub fn build_module(
    module: &SourceModule,
    binding: &BindingLayer,
    catalog: &Catalog,
    types: &TypeRegistry,
    awaitable: &AwaitableNames,
    interner: &mut StringInterner,
    bag: &mut DiagnosticBag,
    file: &str,
    source: &str,
) -> IrModule {
    let mut ctx = BuildContext::new(binding, catalog, types, interner, bag, awaitable, file, source);
    let mut ir = convert_module(module, &mut ctx);
    narrow::run(&mut ir, &mut ctx);
    soundness::check_module(&ir, &mut ctx);
    ir
}
