//! Diagnostic and error reporting plumbing for the struxc compiler (spec §7).
//!
//! Diagnostics accumulate in a per-compilation [`DiagnosticBag`]; a
//! compilation fails iff the bag contains any error-severity entry. This
//! crate only defines the data model and the stderr renderer — phase code
//! decides *when* to push a diagnostic.

mod bag;
mod diagnostic;
mod error_code;
pub mod emitter;

pub use bag::DiagnosticBag;
pub use diagnostic::{line_of_offset, Diagnostic, Severity};
pub use error_code::ErrorCode;
