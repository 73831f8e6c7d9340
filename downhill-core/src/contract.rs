//! Dimension and coordinate-index checks.
//!
//! Evaluation contracts in this crate are unchecked in release builds:
//! passing a wrongly sized slice or an out-of-range coordinate index is a
//! caller bug, not a recoverable condition. Debug builds assert every
//! precondition through these helpers so violations fail loudly at the
//! offending call site. Concrete implementations are encouraged to apply
//! the same helpers in their own primitives, keeping one policy across
//! the whole function stack.

/// Asserts that a coordinate or gradient buffer has the expected length.
#[inline]
#[track_caller]
pub fn check_dim(dim: usize, len: usize) {
    debug_assert!(
        len == dim,
        "dimension mismatch: function expects {dim} coordinates, got {len}"
    );
}

/// Asserts that a coordinate index addresses a valid coordinate.
#[inline]
#[track_caller]
pub fn check_coord(icoord: usize, dim: usize) {
    debug_assert!(
        icoord < dim,
        "coordinate index {icoord} out of range for dimension {dim}"
    );
}
