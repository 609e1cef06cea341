//! The module graph's own opaque handle, issued in discovery order.

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ModuleId(u32);

impl ModuleId {
    pub(crate) fn from_raw(raw: u32) -> Self {
        ModuleId(raw)
    }

    #[must_use]
    pub fn raw(self) -> u32 {
        self.0
    }
}
