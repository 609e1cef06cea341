//! Real-filesystem [`SourceLoader`] (spec §4.2 leaves loading out of scope;
//! spec §5 "batched filesystem reads at the start"). `struxc_graph` hands
//! this canonical paths with the source extension already stripped — this
//! loader re-appends it to find the file on disk.

use std::fs;
use std::path::Path;

use struxc_graph::{SourceLoader, SOURCE_EXT};

pub struct FsLoader<'a> {
    root: &'a Path,
}

impl<'a> FsLoader<'a> {
    #[must_use]
    pub fn new(root: &'a Path) -> Self {
        FsLoader { root }
    }
}

impl SourceLoader for FsLoader<'_> {
    fn load(&self, canonical_path: &str) -> Option<String> {
        let full = self.root.join(format!("{canonical_path}.{SOURCE_EXT}"));
        fs::read_to_string(full).ok()
    }
}
