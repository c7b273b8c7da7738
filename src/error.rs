//! Error type for host-facing operations.
//!
//! Failure of a goal is not an error: a goal that cannot be satisfied
//! simply produces no answers. Errors only arise at the boundary where
//! host code constructs relations, loads facts, or extracts typed
//! values from answer terms.

use crate::core::term::Term;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A relation was called or loaded with the wrong number of terms.
    #[error("relation {relation} expects {expected} arguments, got {got}")]
    ArityMismatch {
        relation: String,
        expected: usize,
        got: usize,
    },

    /// A recursive relation handle was given a definition twice.
    #[error("relation {0} is already defined")]
    Redefined(&'static str),

    /// A term still contained unresolved variables where host code
    /// needed a ground value.
    #[error("term is not ground: {0:?}")]
    NonGround(Term),

    /// A ground term had the wrong shape for the requested conversion.
    #[error("expected {expected}, got {got:?}")]
    TypeMismatch { expected: &'static str, got: Term },
}
