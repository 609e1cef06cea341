//! Lexical scope stack used while walking a module to resolve identifier
//! and type-reference syntax to [`DeclId`]s. One name space for both value
//! and type names, matching how this language family actually binds: a
//! `class`/`interface`/`enum`/`type` declaration is simultaneously a value
//! in scope (for `instanceof`, constructor calls) and a type in scope.

use rustc_hash::FxHashMap;
use struxc_ir::Name;

use crate::ids::DeclId;

#[derive(Default)]
struct Frame {
    bindings: FxHashMap<Name, DeclId>,
}

pub(crate) struct ScopeStack {
    frames: Vec<Frame>,
}

impl ScopeStack {
    pub(crate) fn new() -> Self {
        ScopeStack { frames: vec![Frame::default()] }
    }

    pub(crate) fn push(&mut self) {
        self.frames.push(Frame::default());
    }

    pub(crate) fn pop(&mut self) {
        self.frames.pop();
        debug_assert!(!self.frames.is_empty(), "popped the module-level scope frame");
    }

    pub(crate) fn define(&mut self, name: Name, id: DeclId) {
        self.frames
            .last_mut()
            .expect("ScopeStack always has at least one frame")
            .bindings
            .insert(name, id);
    }

    pub(crate) fn resolve(&self, name: Name) -> Option<DeclId> {
        self.frames.iter().rev().find_map(|frame| frame.bindings.get(&name).copied())
    }
}
