//! Fatal, non-diagnostic failures the Project Manifest Generator can raise
//! (spec §7 "user-input errors"); these abort the compilation before any
//! output is written, distinct from the per-source diagnostics collected
//! in a [`struxc_diagnostic::DiagnosticBag`].

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Spec §4.8: the entry module exports both a `main()` function and
    /// top-level executable statements, making startup order ambiguous.
    #[error("{module}: exports `main()` and contains top-level executable statements; startup order would be ambiguous")]
    EntryPointConflict { module: String },
    #[error("could not serialize manifest metadata: {detail}")]
    MetadataSerialization { detail: String },
}
