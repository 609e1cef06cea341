//! Semantic pass 2 — Public Local Types (spec §4.6): the set of
//! module-local type declarations transitively reachable from an exported
//! function/class/interface signature. Only these need their full
//! structural adapter/companion class generated at emission; a type used
//! purely inside a module's private implementation does not.

use rustc_hash::FxHashSet;
use struxc_ir::ir::{IrClassDecl, IrClassMember, IrModule, IrStmtKind, IrType};
use struxc_ir::Name;

use super::local_types::LocalTypesIndex;

#[derive(Default, Debug, Clone)]
pub struct PublicTypesIndex {
    reachable: FxHashSet<Name>,
}

impl PublicTypesIndex {
    #[must_use]
    pub fn build(module: &IrModule, locals: &LocalTypesIndex) -> Self {
        let mut reachable = FxHashSet::default();
        let mut worklist: Vec<Name> = Vec::new();

        for stmt in &module.statements {
            match &stmt.kind {
                IrStmtKind::Function(f) if f.is_exported => {
                    for p in &f.params {
                        collect_from_opt(&p.ty, locals, &mut worklist);
                    }
                    collect_from_opt(&f.return_type, locals, &mut worklist);
                }
                IrStmtKind::Class(c) if c.is_exported => {
                    worklist.push(c.name);
                }
                IrStmtKind::Interface(i) if i.is_exported => {
                    worklist.push(i.name);
                }
                IrStmtKind::Enum(e) if e.is_exported => {
                    worklist.push(e.name);
                }
                IrStmtKind::TypeAlias(a) if a.is_exported => {
                    worklist.push(a.name);
                }
                _ => {}
            }
        }

        while let Some(name) = worklist.pop() {
            if !locals.contains(name) || !reachable.insert(name) {
                continue;
            }
            if let Some(class) = find_class(module, name) {
                collect_class_refs(class, locals, &mut worklist);
            }
            if let Some(stmt) = find_interface(module, name) {
                if let Some(ext) = stmt.extends.first() {
                    collect_ref(ext, locals, &mut worklist);
                }
                for ext in &stmt.extends {
                    collect_ref(ext, locals, &mut worklist);
                }
                for m in &stmt.members {
                    collect_ref(&m.ty, locals, &mut worklist);
                }
            }
            if let Some(alias) = find_alias(module, name) {
                collect_ref(&alias.ty, locals, &mut worklist);
            }
        }

        PublicTypesIndex { reachable }
    }

    #[must_use]
    pub fn contains(&self, name: Name) -> bool {
        self.reachable.contains(&name)
    }
}

fn collect_from_opt(ty: &Option<IrType>, locals: &LocalTypesIndex, out: &mut Vec<Name>) {
    if let Some(ty) = ty {
        collect_ref(ty, locals, out);
    }
}

fn collect_ref(ty: &IrType, locals: &LocalTypesIndex, out: &mut Vec<Name>) {
    match ty {
        IrType::Reference { name, type_args, .. } => {
            if locals.contains(*name) {
                out.push(*name);
            }
            for arg in type_args {
                collect_ref(arg, locals, out);
            }
        }
        IrType::Array { element, .. } => collect_ref(element, locals, out),
        IrType::Tuple(parts) | IrType::Union(parts) | IrType::Intersection(parts) => {
            parts.iter().for_each(|p| collect_ref(p, locals, out));
        }
        IrType::Function { params, ret } => {
            params.iter().for_each(|p| collect_ref(p, locals, out));
            collect_ref(ret, locals, out);
        }
        IrType::Object { members } => members.iter().for_each(|m| collect_ref(&m.ty, locals, out)),
        IrType::Dictionary { key, value } => {
            collect_ref(key, locals, out);
            collect_ref(value, locals, out);
        }
        _ => {}
    }
}

fn collect_class_refs(class: &IrClassDecl, locals: &LocalTypesIndex, out: &mut Vec<Name>) {
    if let Some(ext) = &class.extends {
        collect_ref(ext, locals, out);
    }
    for i in &class.implements {
        collect_ref(i, locals, out);
    }
    for member in &class.members {
        match member {
            IrClassMember::Field { ty: Some(ty), .. } | IrClassMember::Property { ty: Some(ty), .. } => collect_ref(ty, locals, out),
            IrClassMember::Method { params, return_type, .. } => {
                params.iter().for_each(|p| collect_from_opt(&p.ty, locals, out));
                collect_from_opt(return_type, locals, out);
            }
            IrClassMember::Constructor { params, .. } => params.iter().for_each(|p| collect_from_opt(&p.ty, locals, out)),
            _ => {}
        }
    }
}

fn find_class<'m>(module: &'m IrModule, name: Name) -> Option<&'m IrClassDecl> {
    module.statements.iter().find_map(|s| match &s.kind {
        IrStmtKind::Class(c) if c.name == name => Some(c.as_ref()),
        _ => None,
    })
}

fn find_interface<'m>(module: &'m IrModule, name: Name) -> Option<&'m struxc_ir::ir::IrInterfaceDecl> {
    module.statements.iter().find_map(|s| match &s.kind {
        IrStmtKind::Interface(i) if i.name == name => Some(i.as_ref()),
        _ => None,
    })
}

fn find_alias<'m>(module: &'m IrModule, name: Name) -> Option<&'m struxc_ir::ir::IrTypeAliasDecl> {
    module.statements.iter().find_map(|s| match &s.kind {
        IrStmtKind::TypeAlias(a) if a.name == name => Some(a.as_ref()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_ir::ir::{IrFunctionDecl, PrimitiveType};
    use struxc_ir::Span;

    #[test]
    fn exported_function_pulls_in_param_type() {
        let mut interner = struxc_ir::StringInterner::new();
        let widget = interner.intern("Widget");
        let module = IrModule {
            statements: vec![
                struxc_ir::ir::IrStmt {
                    kind: IrStmtKind::Class(Box::new(IrClassDecl {
                        name: widget,
                        generics: vec![],
                        extends: None,
                        implements: vec![],
                        members: vec![],
                        is_exported: false,
                        span: Span::DUMMY,
                    })),
                    span: Span::DUMMY,
                },
                struxc_ir::ir::IrStmt {
                    kind: IrStmtKind::Function(Box::new(IrFunctionDecl {
                        name: None,
                        generics: vec![],
                        params: vec![struxc_ir::ir::IrParam {
                            pattern: struxc_ir::ast::BindingPattern::Identifier { span: Span::DUMMY, name: widget, ty: None },
                            ty: Some(IrType::Reference { name: widget, type_args: vec![], clr_binding: None, structural_members: None }),
                            default: None,
                            passing: Default::default(),
                            is_extension_receiver: false,
                        }],
                        return_type: Some(IrType::Primitive(PrimitiveType::Boolean)),
                        body: vec![],
                        is_async: false,
                        is_generator: false,
                        is_bidirectional_generator: false,
                        is_exported: true,
                        span: Span::DUMMY,
                    })),
                    span: Span::DUMMY,
                },
            ],
        };
        let locals = LocalTypesIndex::build(&module);
        let public = PublicTypesIndex::build(&module, &locals);
        assert!(public.contains(widget));
    }
}
