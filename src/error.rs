use thiserror::Error;

/// Shorthand for fallible vector operations.
pub type Result<T> = std::result::Result<T, UnsupportedOperation>;

/// A requested operation has no implementation for the active element type /
/// dimension combination.
///
/// Most bad combinations never get this far: an operator the element type
/// lacks (unary minus on an unsigned vector, arithmetic on a boolean vector)
/// is simply missing its trait bound and fails to compile. This value covers
/// the cases that are only decidable from the dimension parameter, like a
/// cross product on a vector that is not 3-dimensional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported operation: {op}")]
pub struct UnsupportedOperation {
    /// Name of the operation that was requested.
    pub op: &'static str,
}
