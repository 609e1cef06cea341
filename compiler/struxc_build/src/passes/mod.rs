//! Semantic Passes (spec §4.6): run once per module, in fixed order, over
//! the IR Builder's output. Passes 1/2/4/5/6 are purely local to one
//! module's `IrModule`; pass 3 (module identity + export resolution) reads
//! off the Module Graph Builder's already-computed graph and export map
//! instead of recomputing them.

pub mod json_registry;
pub mod local_types;
pub mod module_map;
pub mod naming;
pub mod numeric_pass;
pub mod public_types;

pub use json_registry::JsonAotRegistry;
pub use local_types::LocalTypesIndex;
pub use module_map::{ModuleIdentity, ModuleMap};
pub use public_types::PublicTypesIndex;

use struxc_diagnostic::DiagnosticBag;
use struxc_graph::{ExportMap, ModuleGraph, ModuleId};
use struxc_ir::ir::IrModule;
use struxc_ir::StringInterner;

/// Everything the Semantic Passes compute for one module, handed to the
/// Emitter alongside the lowered `IrModule` itself.
pub struct ModuleBuildOutput {
    pub module: IrModule,
    pub identity: ModuleIdentity,
    pub local_types: LocalTypesIndex,
    pub public_types: PublicTypesIndex,
    pub json_registry: JsonAotRegistry,
}

/// Runs passes 1–2 and 4–6 over `module`, and resolves pass 3's identity
/// lookup for it. The Module Graph and Export Map are built once across
/// the whole module set by the caller (spec §4.2) and passed in here
/// rather than recomputed per module.
pub fn run_all(
    mut module: IrModule,
    id: ModuleId,
    graph: &ModuleGraph,
    export_map: &ExportMap,
    interner: &StringInterner,
    file: &str,
    source: &str,
    bag: &mut DiagnosticBag,
) -> ModuleBuildOutput {
    let identity = ModuleMap::new(graph, export_map).identity_of(id);

    let local_types = LocalTypesIndex::build(&module);
    let public_types = PublicTypesIndex::build(&module, &local_types);
    naming::check(&module, &identity.class_name, interner, file, source, bag);
    numeric_pass::run(&mut module.statements);
    let json_registry = JsonAotRegistry::build(&module, interner);

    ModuleBuildOutput { module, identity, local_types, public_types, json_registry }
}
