//! Type-algebra failures. Carries no diagnostic code or file location —
//! this crate never sees a file path, so turning a [`TypeError`] into a
//! `TSN7414` diagnostic is the caller's job once it knows which file and
//! span triggered it (mirrors `struxc_binding`'s plain-`Option` convention).

#[derive(Debug, Clone, PartialEq)]
pub enum TypeError {
    /// `Pick`/`Omit`'s key argument wasn't a finite literal-string union.
    NonLiteralKeySet { operation: &'static str },
    /// `ReturnType`/`Parameters` applied to a non-function type.
    NotAFunction { operation: &'static str },
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeError::NonLiteralKeySet { operation } => {
                write!(f, "{operation}'s key argument must be a finite literal-string union")
            }
            TypeError::NotAFunction { operation } => {
                write!(f, "{operation} requires a function type")
            }
        }
    }
}

impl std::error::Error for TypeError {}
