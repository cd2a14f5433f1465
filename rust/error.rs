//! Recoverable errors.
//!
//! Contract violations (mismatched lengths, out-of-range indices) are not
//! represented here: they panic at the call site.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, VectorError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// The allocator could not provide a buffer for `len` elements.
    #[error("memory allocation failed for {len} elements")]
    AllocationFailed { len: usize },

    /// The first element of a raw modified-rotation block is not a known flag.
    #[error("invalid modified rotation flag: {0}")]
    InvalidRotmFlag(f64),
}
