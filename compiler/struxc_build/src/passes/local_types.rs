//! Semantic pass 1 — Local Types Index (spec §4.6): every type-level name
//! (`class`/`interface`/`enum`/`type`) a module declares at its top level,
//! keyed for quick membership checks by later passes and by emission's
//! import resolution.

use rustc_hash::FxHashSet;
use struxc_ir::ir::{IrModule, IrStmtKind};
use struxc_ir::Name;

#[derive(Default, Debug, Clone)]
pub struct LocalTypesIndex {
    names: FxHashSet<Name>,
}

impl LocalTypesIndex {
    #[must_use]
    pub fn build(module: &IrModule) -> Self {
        let mut names = FxHashSet::default();
        for stmt in &module.statements {
            match &stmt.kind {
                IrStmtKind::Class(c) => {
                    names.insert(c.name);
                }
                IrStmtKind::Interface(i) => {
                    names.insert(i.name);
                }
                IrStmtKind::Enum(e) => {
                    names.insert(e.name);
                }
                IrStmtKind::TypeAlias(a) => {
                    names.insert(a.name);
                }
                _ => {}
            }
        }
        LocalTypesIndex { names }
    }

    #[must_use]
    pub fn contains(&self, name: Name) -> bool {
        self.names.contains(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = Name> + '_ {
        self.names.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_ir::ir::{IrClassDecl, IrStmt};
    use struxc_ir::Span;

    #[test]
    fn indexes_every_declared_type() {
        let mut interner = struxc_ir::StringInterner::new();
        let name = interner.intern("Widget");
        let module = IrModule {
            statements: vec![IrStmt {
                kind: IrStmtKind::Class(Box::new(IrClassDecl {
                    name,
                    generics: vec![],
                    extends: None,
                    implements: vec![],
                    members: vec![],
                    is_exported: false,
                    span: Span::DUMMY,
                })),
                span: Span::DUMMY,
            }],
        };
        let index = LocalTypesIndex::build(&module);
        assert!(index.contains(name));
    }
}
