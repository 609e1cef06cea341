//! Fatal, non-diagnostic failures that abort graph construction before any
//! module reaches the diagnostic bag (spec §7 "user-input errors").

use struxc_parse::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("entry file not found: {0}")]
    EntryNotFound(String),
    #[error("{path}: {source}")]
    Parse { path: String, #[source] source: ParseError },
}
