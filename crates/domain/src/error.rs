//! Domain errors
//!
//! Unknown vocabulary tags and broken editor-state invariants. Text that does
//! not parse as a number is reported separately as
//! [`SkipUpdate`](crate::value_objects::SkipUpdate).

use thiserror::Error;

/// Failure of a domain-level check
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A tag outside the fixed vocabularies
    #[error("Parse error: {0}")]
    Parse(String),

    /// An `EditorState` invariant does not hold
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl DomainError {
    /// Unknown tag in a `FromStr` impl
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }
}
