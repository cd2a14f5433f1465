//! # fvec - Typed Dense Vectors over Level-1 BLAS
//!
//! * Owned, fixed-length `f64` and `Complex64` vectors with deep-copy semantics.
//! * Every operation forwards to the matching Fortran-convention Level-1 routine.
//! * Builds against a bundled reference kernel, or a system BLAS with `system-blas`.
//! * Real-only and complex-only operations are resolved at compile time.
//!
//! ## Implemented operations include:
//!
//! * `scale`, `axpy`, `copy_from`, `swap` updates.
//! * `dot` for real vectors, `dotu` and `dotc` for complex ones.
//! * `norm2`, `norm1` and `arg_abs_max` reductions.
//! * Givens and modified Givens rotations, generated and applied.
//!
//! The slice-level routines are exposed through the sealed traits [`Level1`],
//! [`RealLevel1`] and [`ComplexLevel1`], implemented for `f64` and [`Complex64`].
//! [`Vector`] owns its buffer and wraps those routines.
//!
//! # Example
//!
//! ```rust
//! use fvec::{Complex64, Vector};
//!
//! let x = Vector::from_slice(&[1.0, 0.0]);
//! let y = Vector::from_slice(&[0.0, 1.0]);
//! assert_eq!(y.dot(&x), 0.0);
//!
//! let z = Vector::from_slice(&[Complex64::new(0.0, 1.0), Complex64::new(2.0, 0.0)]);
//! assert_eq!(z.dotc(&z), Complex64::new(5.0, 0.0));
//! assert_eq!(z.arg_abs_max(), 1);
//! ```
//!
//! # Panics
//!
//! Mismatched operand lengths and out-of-range indices are contract violations
//! and panic before the kernel is entered. Allocation failure is reported
//! through [`VectorError`] by the `try_*` constructors.

mod ffi;

pub mod allocator;
pub mod error;
pub mod level1;
pub mod rotation;
pub mod vector;

pub use allocator::{Allocator, Global};
pub use error::{Result, VectorError};
pub use level1::{ComplexLevel1, Level1, RealLevel1};
pub use num_complex::Complex64;
pub use rotation::{Givens, ModifiedGivens, RotmFlag, RotmParam};
pub use vector::Vector;

/// The `kernel` module reports which native Level-1 kernel the crate was linked against.
pub mod kernel {
    /// Native kernel backing every operation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Kernel {
        /// Reference C99 kernel compiled by the build script.
        Bundled,
        /// External BLAS selected with the `system-blas` feature.
        System,
    }

    impl Kernel {
        pub fn name(self) -> &'static str {
            match self {
                Kernel::Bundled => "bundled",
                Kernel::System => "system",
            }
        }
    }

    /// Returns the kernel chosen at build time.
    pub fn linked() -> Kernel {
        if cfg!(feature = "system-blas") {
            Kernel::System
        } else {
            Kernel::Bundled
        }
    }
}
