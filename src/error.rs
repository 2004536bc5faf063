use thiserror::Error;

/// Errors surfaced by [`Tree`](crate::Tree) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The operation requires a state the tree is not in, e.g. reading the
    /// root of an empty tree. Carries the name of the failing operation.
    #[error("{0}: called on an empty tree")]
    PreconditionViolated(&'static str),

    /// A value lookup did not find the requested entry.
    #[error("entry not found in this tree")]
    NotFound,
}

/// Shorthand for results of [`Tree`](crate::Tree) operations.
pub type TreeResult<T> = Result<T, TreeError>;
