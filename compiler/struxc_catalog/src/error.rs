//! Catalog-loading failure model (spec §4.1, §7).
//!
//! Two different kinds of failure can occur while loading descriptors, and
//! they are handled differently. A malformed or incomplete descriptor file
//! is a recoverable per-file problem: it is reported and skipped, and the
//! rest of the load proceeds. A type declared by more than one `--type-roots`
//! directory is a fatal misconfiguration — the caller cannot know which
//! root's view of that type is authoritative, so loading aborts.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CatalogLoadWarning {
    Io { path: PathBuf, detail: String },
    MalformedJson { path: PathBuf, detail: String },
}

impl fmt::Display for CatalogLoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogLoadWarning::Io { path, detail } => {
                write!(f, "{}: could not read descriptor: {detail}", path.display())
            }
            CatalogLoadWarning::MalformedJson { path, detail } => {
                write!(f, "{}: malformed catalog descriptor, skipping: {detail}", path.display())
            }
        }
    }
}

#[derive(Debug)]
pub struct CatalogFatalError {
    pub clr_name: String,
    pub first_root: PathBuf,
    pub second_root: PathBuf,
}

impl fmt::Display for CatalogFatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type '{}' is declared by both '{}' and '{}'; a type must come from exactly one --type-roots entry",
            self.clr_name,
            self.first_root.display(),
            self.second_root.display()
        )
    }
}

impl std::error::Error for CatalogFatalError {}
