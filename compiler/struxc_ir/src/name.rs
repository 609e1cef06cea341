//! Interned identifier handles.

use std::fmt;

/// An interned identifier. Cheap to copy and compare; resolve back to text
/// via `StringInterner::resolve`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Name(pub(crate) u32);

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}
