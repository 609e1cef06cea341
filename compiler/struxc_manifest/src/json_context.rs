//! AOT JSON serialization context (spec §4.8 ambient responsibility, see
//! `struxc_emit`'s Expression Emitter rewrite of `JSON.stringify`/`JSON.parse`
//! onto `AppJsonContext.Default.<TypeName>`): this module is what actually
//! produces that `AppJsonContext` partial class, from the closed concrete
//! types `struxc_build::passes::JsonAotRegistry` collected while building
//! each module. Rendered as a plain string template rather than through the
//! Backend AST/Printer pair, since attribute lists (`[JsonSerializable]`)
//! have no representation in the Backend AST and adding one for a single
//! generated file isn't worth the surface area.

use struxc_build::passes::JsonAotRegistry;
use struxc_diagnostic::DiagnosticBag;
use struxc_emit::printer;
use struxc_emit::ty::emit_type;
use struxc_ir::StringInterner;

#[must_use]
pub fn render_app_json_context(namespace: &str, registry: &JsonAotRegistry, interner: &StringInterner) -> String {
    let mut scratch_bag = DiagnosticBag::new();
    let ctx = struxc_emit::context::EmitContext::new(interner, &mut scratch_bag, "<manifest>", "");

    let mut type_names: Vec<String> = registry.types().iter().map(|ty| printer::type_ref(&emit_type(ty, &ctx))).collect();
    type_names.sort();
    type_names.dedup();

    let mut out = String::new();
    out.push_str("using System.Text.Json.Serialization;\n\n");
    out.push_str(&format!("namespace {namespace};\n\n"));
    out.push_str("[JsonSourceGenerationOptions(PropertyNameCaseInsensitive = true)]\n");
    for name in &type_names {
        out.push_str(&format!("[JsonSerializable(typeof({name}))]\n"));
    }
    out.push_str("internal partial class AppJsonContext : JsonSerializerContext\n{\n}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_build::passes::JsonAotRegistry;
    use struxc_ir::ir::{IrModule, IrStmt, IrStmtKind};
    use struxc_ir::Span;

    #[test]
    fn empty_registry_still_emits_a_valid_context_class() {
        let interner = StringInterner::new();
        let module = IrModule { statements: vec![IrStmt { kind: IrStmtKind::Empty, span: Span::DUMMY }] };
        let registry = JsonAotRegistry::build(&module, &interner);
        let rendered = render_app_json_context("App.Generated", &registry, &interner);
        assert!(rendered.contains("partial class AppJsonContext : JsonSerializerContext"));
        assert!(rendered.contains("namespace App.Generated;"));
    }
}
