//! Raw declarations of the Level-1 kernel routines.
//!
//! These follow the Fortran calling convention: every scalar, including vector
//! lengths and strides, is passed by address. `i*amax_` routines return one-based
//! indices. Complex values are [`Complex64`], which is `#[repr(C)]` with the real
//! part first, matching the kernel's two-`f64` layout.
//!
//! All functions are unsafe. Safe wrappers live in [`crate::level1`].

#![allow(non_camel_case_types)]

use core::ffi::c_int;

use num_complex::Complex64;

/// Signed 32-bit length/stride type of the kernel.
pub(crate) type blas_int = c_int;

extern "C" {
    // region: Double

    /// `y := alpha*x + y`
    pub(crate) fn daxpy_(
        n: *const blas_int,
        alpha: *const f64,
        x: *const f64,
        incx: *const blas_int,
        y: *mut f64,
        incy: *const blas_int,
    );

    /// `x := alpha*x`
    pub(crate) fn dscal_(n: *const blas_int, alpha: *const f64, x: *mut f64, incx: *const blas_int);

    /// `y := x`
    pub(crate) fn dcopy_(
        n: *const blas_int,
        x: *const f64,
        incx: *const blas_int,
        y: *mut f64,
        incy: *const blas_int,
    );

    /// `x <-> y`
    pub(crate) fn dswap_(
        n: *const blas_int,
        x: *mut f64,
        incx: *const blas_int,
        y: *mut f64,
        incy: *const blas_int,
    );

    /// `x^T * y`
    pub(crate) fn ddot_(
        n: *const blas_int,
        x: *const f64,
        incx: *const blas_int,
        y: *const f64,
        incy: *const blas_int,
    ) -> f64;

    /// `||x||_2`
    pub(crate) fn dnrm2_(n: *const blas_int, x: *const f64, incx: *const blas_int) -> f64;

    /// `sum |x_i|`
    pub(crate) fn dasum_(n: *const blas_int, x: *const f64, incx: *const blas_int) -> f64;

    /// One-based `argmax |x_i|`, 0 for an empty vector.
    pub(crate) fn idamax_(n: *const blas_int, x: *const f64, incx: *const blas_int) -> blas_int;

    /// On exit `a` holds `r`, `b` holds the reconstruction value `z`.
    pub(crate) fn drotg_(a: *mut f64, b: *mut f64, c: *mut f64, s: *mut f64);

    /// `x := c*x + s*y`, `y := c*y - s*x`
    pub(crate) fn drot_(
        n: *const blas_int,
        x: *mut f64,
        incx: *const blas_int,
        y: *mut f64,
        incy: *const blas_int,
        c: *const f64,
        s: *const f64,
    );

    /// Writes `[flag, h11, h21, h12, h22]` into `param`.
    pub(crate) fn drotmg_(d1: *mut f64, d2: *mut f64, x1: *mut f64, y1: *const f64, param: *mut f64);

    /// Applies the modified rotation described by `param` to `(x, y)`.
    pub(crate) fn drotm_(
        n: *const blas_int,
        x: *mut f64,
        incx: *const blas_int,
        y: *mut f64,
        incy: *const blas_int,
        param: *const f64,
    );

    // endregion: Double

    // region: Double Complex

    pub(crate) fn zaxpy_(
        n: *const blas_int,
        alpha: *const Complex64,
        x: *const Complex64,
        incx: *const blas_int,
        y: *mut Complex64,
        incy: *const blas_int,
    );

    pub(crate) fn zscal_(
        n: *const blas_int,
        alpha: *const Complex64,
        x: *mut Complex64,
        incx: *const blas_int,
    );

    pub(crate) fn zcopy_(
        n: *const blas_int,
        x: *const Complex64,
        incx: *const blas_int,
        y: *mut Complex64,
        incy: *const blas_int,
    );

    pub(crate) fn zswap_(
        n: *const blas_int,
        x: *mut Complex64,
        incx: *const blas_int,
        y: *mut Complex64,
        incy: *const blas_int,
    );

    /// `x^T * y`
    pub(crate) fn zdotu_(
        n: *const blas_int,
        x: *const Complex64,
        incx: *const blas_int,
        y: *const Complex64,
        incy: *const blas_int,
    ) -> Complex64;

    /// `x^H * y`
    pub(crate) fn zdotc_(
        n: *const blas_int,
        x: *const Complex64,
        incx: *const blas_int,
        y: *const Complex64,
        incy: *const blas_int,
    ) -> Complex64;

    pub(crate) fn dznrm2_(n: *const blas_int, x: *const Complex64, incx: *const blas_int) -> f64;

    /// `sum |Re(x_i)| + |Im(x_i)|`
    pub(crate) fn dzasum_(n: *const blas_int, x: *const Complex64, incx: *const blas_int) -> f64;

    /// One-based `argmax |Re(x_i)| + |Im(x_i)|`, 0 for an empty vector.
    pub(crate) fn izamax_(n: *const blas_int, x: *const Complex64, incx: *const blas_int)
        -> blas_int;

    /// Real cosine, complex sine. On exit `a` holds `r`; `b` is left untouched.
    pub(crate) fn zrotg_(a: *mut Complex64, b: *const Complex64, c: *mut f64, s: *mut Complex64);

    /// `x := c*x + s*y`, `y := c*y - conj(s)*x`
    pub(crate) fn zrot_(
        n: *const blas_int,
        x: *mut Complex64,
        incx: *const blas_int,
        y: *mut Complex64,
        incy: *const blas_int,
        c: *const f64,
        s: *const Complex64,
    );

    // endregion: Double Complex
}
