//! String interner for identifiers.
//!
//! A compilation is single-threaded (see spec §5), so this interner is a
//! plain owned value rather than the sharded/locked interner a concurrent
//! compiler would need — one per compilation, dropped when it ends.

use rustc_hash::FxHashMap;

use crate::name::Name;

/// Owns interned identifier text for one compilation.
#[derive(Default)]
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning a stable handle. Interning the same text
    /// twice returns the same `Name`.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.map.get(text) {
            return name;
        }
        let idx = self.strings.len() as u32;
        let boxed: Box<str> = text.into();
        self.strings.push(boxed.clone());
        let name = Name(idx);
        self.map.insert(boxed, name);
        name
    }

    /// Resolve a `Name` back to its text.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    #[must_use]
    pub fn resolve(&self, name: Name) -> &str {
        &self.strings[name.0 as usize]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_same_text_twice_returns_same_name() {
        let mut interner = StringInterner::new();
        let a = interner.intern("foo");
        let b = interner.intern("foo");
        assert_eq!(a, b);
        assert_eq!(interner.resolve(a), "foo");
    }

    #[test]
    fn distinct_text_gets_distinct_names() {
        let mut interner = StringInterner::new();
        let a = interner.intern("foo");
        let b = interner.intern("bar");
        assert_ne!(a, b);
    }
}
