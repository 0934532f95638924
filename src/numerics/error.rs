// src/numerics/error.rs
// Error taxonomy for the numerics value types.

#![allow(dead_code)]

/// Errors that can occur during numeric operations.
///
/// Every fallible operation in this module is a pure, local computation, so
/// none of these are retried or recovered internally. An operation either
/// fully succeeds or fails before mutating its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumericsError {
    #[error("Index out of range: {index} exceeds element count {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid domain: coordinates must be zero or higher")]
    InvalidDomain,

    #[error("Singular matrix: determinant is zero, no inverse exists")]
    SingularMatrix,
}
