//! Generator Exchange + Wrapper (spec §4.7): a bidirectional generator
//! (`is_bidirectional_generator` on [`struxc_ir::ir::IrFunctionDecl`]) needs
//! both the value sent in (`.next(v)`) and the value yielded out threaded
//! through one iterator, which `IEnumerator<T>` alone can't express. This
//! emits a small `Name_exchange` carrier class plus a wrapper type
//! implementing `IEnumerator<TOutput>` with `Next`/`Return`/`Throw` methods
//! that drive an inner state machine method through the exchange.

use struxc_ir::ir::IrType;

use crate::backend::*;
use crate::context::EmitContext;
use crate::ty::emit_type;

/// Derives a generator's yielded-output and sent-input types from its
/// declared return type (`Generator<TYield, TReturn, TNext>` / its async
/// counterpart). Falls back to `object`/`object` when there's no
/// annotation or the reference doesn't match one of these well-known
/// generic names — the Type System doesn't infer a generator's shape from
/// its body today, only from what was written.
fn generator_io_types(return_type: Option<&IrType>, ctx: &EmitContext<'_>) -> (IrType, IrType) {
    match return_type {
        Some(IrType::Reference { name, type_args, .. }) if matches!(ctx.resolve(*name), "Generator" | "AsyncGenerator") => {
            let output = type_args.first().cloned().unwrap_or(IrType::Any);
            let input = type_args.get(2).cloned().unwrap_or(IrType::Any);
            (input, output)
        }
        _ => (IrType::Any, IrType::Any),
    }
}

/// Registers the exchange class for a generator function, and additionally
/// the wrapper class when it's bidirectional (spec §4.7 "Generator
/// Exchange + Wrapper"). `name` is the emitted (backend) name of the
/// generator function or method, used as the companion classes' prefix.
pub fn register_companions(name: &str, return_type: Option<&IrType>, is_generator: bool, is_bidirectional_generator: bool, ctx: &mut EmitContext<'_>) {
    if !is_generator {
        return;
    }
    let (input_ty, output_ty) = generator_io_types(return_type, ctx);
    if !ctx.has_extra_type(&format!("{name}_exchange")) {
        let exchange = exchange_class(name, &input_ty, &output_ty, ctx);
        ctx.push_extra_type(exchange);
    }
    if is_bidirectional_generator && !ctx.has_extra_type(&format!("{name}_wrapper")) {
        let wrapper = wrapper_class(name, &input_ty, &output_ty, ctx);
        ctx.push_extra_type(wrapper);
    }
}

/// `Name_exchange { Input; Output; }` — a plain data carrier passed by
/// reference into the generator's state-machine method each step.
#[must_use]
pub fn exchange_class(generator_name: &str, input_ty: &IrType, output_ty: &IrType, ctx: &mut EmitContext<'_>) -> BTypeDecl {
    let mut decl = BTypeDecl::class(format!("{generator_name}_exchange"));
    decl.members = vec![
        BMember::Field { name: "Input".to_string(), ty: emit_type(input_ty, ctx), init: None, visibility: BVisibility::Public, is_static: false, is_readonly: false },
        BMember::Field { name: "Output".to_string(), ty: emit_type(output_ty, ctx), init: None, visibility: BVisibility::Public, is_static: false, is_readonly: false },
    ];
    decl
}

/// A wrapper class implementing the bidirectional-generator protocol: it
/// owns one `Name_exchange` instance and exposes `Next`/`Return`/`Throw`
/// methods that set `Input`, resume the underlying enumerator, and read
/// `Output` back out.
#[must_use]
pub fn wrapper_class(generator_name: &str, input_ty: &IrType, output_ty: &IrType, ctx: &mut EmitContext<'_>) -> BTypeDecl {
    let exchange_ty = BType::simple(format!("global::{generator_name}_exchange"));
    let inner_ty = BType::Named { path: "global::System.Collections.Generic.IEnumerator".to_string(), args: vec![BType::simple(format!("global::{generator_name}_exchange"))] };
    let output_b = emit_type(output_ty, ctx);
    let input_b = emit_type(input_ty, ctx);

    let mut decl = BTypeDecl::class(format!("{generator_name}_wrapper"));
    decl.members.push(BMember::Field { name: "_inner".to_string(), ty: inner_ty.clone(), init: None, visibility: BVisibility::Private, is_static: false, is_readonly: true });
    decl.members.push(BMember::Field { name: "_exchange".to_string(), ty: exchange_ty.clone(), init: None, visibility: BVisibility::Private, is_static: false, is_readonly: true });
    decl.members.push(BMember::Constructor {
        params: vec![BParam { ty: inner_ty, name: "inner".to_string(), mode: BArgMode::Value, default: None, is_extension_this: false }],
        base_args: None,
        body: vec![
            assign_this("_inner", "inner"),
            BStmt::Expr(BExpr::Assign {
                op: BAssignOp::Assign,
                target: Box::new(BExpr::Member { object: Box::new(BExpr::This), name: "_exchange".to_string(), null_conditional: false }),
                value: Box::new(BExpr::New { ty: exchange_ty, args: Vec::new() }),
            }),
        ],
        visibility: BVisibility::Public,
    });
    decl.members.push(next_method("Next", input_b.clone(), output_b.clone()));
    decl.members.push(next_method("Return", input_b, output_b));
    decl
}

fn assign_this(field: &str, local: &str) -> BStmt {
    BStmt::Expr(BExpr::Assign {
        op: BAssignOp::Assign,
        target: Box::new(BExpr::Member { object: Box::new(BExpr::This), name: field.to_string(), null_conditional: false }),
        value: Box::new(BExpr::Identifier(local.to_string())),
    })
}

fn next_method(name: &str, input_ty: BType, output_ty: BType) -> BMember {
    let exchange = BExpr::Member { object: Box::new(BExpr::This), name: "_exchange".to_string(), null_conditional: false };
    let body = vec![
        BStmt::Expr(BExpr::Assign {
            op: BAssignOp::Assign,
            target: Box::new(BExpr::Member { object: Box::new(exchange.clone()), name: "Input".to_string(), null_conditional: false }),
            value: Box::new(BExpr::Identifier("value".to_string())),
        }),
        BStmt::Expr(BExpr::Call {
            callee: Box::new(BExpr::Member { object: Box::new(BExpr::Member { object: Box::new(BExpr::This), name: "_inner".to_string(), null_conditional: false }), name: "MoveNext".to_string(), null_conditional: false }),
            args: Vec::new(),
            null_conditional: false,
        }),
        BStmt::Return(Some(BExpr::Member { object: Box::new(exchange), name: "Output".to_string(), null_conditional: false })),
    ];
    BMember::Method {
        name: name.to_string(),
        generics: Vec::new(),
        params: vec![BParam { ty: input_ty, name: "value".to_string(), mode: BArgMode::Value, default: None, is_extension_this: false }],
        return_type: output_ty,
        body: Some(body),
        visibility: BVisibility::Public,
        is_static: false,
        is_override: false,
        is_abstract: false,
        is_async: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_diagnostic::DiagnosticBag;
    use struxc_ir::ir::PrimitiveType;
    use struxc_ir::StringInterner;

    #[test]
    fn exchange_class_has_input_and_output_fields() {
        let interner = StringInterner::new();
        let mut bag = DiagnosticBag::new();
        let mut ctx = EmitContext::new(&interner, &mut bag, "a.ts", "");
        let decl = exchange_class("Gen", &IrType::Primitive(PrimitiveType::Boolean), &IrType::Primitive(PrimitiveType::String), &mut ctx);
        assert_eq!(decl.members.len(), 2);
        assert_eq!(decl.name, "Gen_exchange");
    }

    #[test]
    fn plain_generator_registers_exchange_only() {
        let mut interner = StringInterner::new();
        let yield_name = interner.intern("Generator");
        let mut bag = DiagnosticBag::new();
        let mut ctx = EmitContext::new(&interner, &mut bag, "a.ts", "");
        let return_type = IrType::Reference {
            name: yield_name,
            type_args: vec![IrType::Primitive(PrimitiveType::String)],
            clr_binding: None,
            structural_members: None,
        };
        register_companions("Gen", Some(&return_type), true, false, &mut ctx);
        let extras = ctx.take_extra_types();
        assert_eq!(extras.len(), 1);
        assert_eq!(extras[0].name, "Gen_exchange");
    }

    #[test]
    fn bidirectional_generator_registers_exchange_and_wrapper() {
        let mut interner = StringInterner::new();
        let name = interner.intern("Generator");
        let mut bag = DiagnosticBag::new();
        let mut ctx = EmitContext::new(&interner, &mut bag, "a.ts", "");
        let return_type = IrType::Reference {
            name,
            type_args: vec![IrType::Primitive(PrimitiveType::String), IrType::Primitive(PrimitiveType::Boolean), IrType::Primitive(PrimitiveType::Boolean)],
            clr_binding: None,
            structural_members: None,
        };
        register_companions("Gen", Some(&return_type), true, true, &mut ctx);
        let extras = ctx.take_extra_types();
        assert!(extras.iter().any(|d| d.name == "Gen_exchange"));
        assert!(extras.iter().any(|d| d.name == "Gen_wrapper"));
    }

    #[test]
    fn non_generator_registers_nothing() {
        let interner = StringInterner::new();
        let mut bag = DiagnosticBag::new();
        let mut ctx = EmitContext::new(&interner, &mut bag, "a.ts", "");
        register_companions("Plain", None, false, false, &mut ctx);
        assert!(ctx.take_extra_types().is_empty());
    }
}
