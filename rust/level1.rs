//! Safe Level-1 routines on contiguous slices.
//!
//! The element type selects the kernel routine at compile time:
//!
//! - [`Level1`]: routines shared by `f64` and [`Complex64`] (`scal`, `axpy`, `copy`,
//!   `swap`, `nrm2`, `asum`, `iamax`, `rotg`, `rot`)
//! - [`RealLevel1`]: real-only routines (`dot`, `rotmg`, `rotm`)
//! - [`ComplexLevel1`]: complex-only products (`dotu`, `dotc`)
//!
//! All slices are passed with unit stride. Mismatched lengths are contract
//! violations and panic before the kernel is entered.
//!
//! # Example
//!
//! ```rust
//! use fvec::{Level1, RealLevel1};
//!
//! let x = [1.0, 2.0, 3.0];
//! let mut y = [4.0, 5.0, 6.0];
//!
//! f64::axpy(2.0, &x, &mut y);
//! assert_eq!(y, [6.0, 9.0, 12.0]);
//! assert_eq!(f64::dot(&x, &y), 60.0);
//! assert_eq!(f64::iamax(&y), Some(2));
//! ```

use core::fmt;

use num_complex::Complex64;

use crate::ffi::{self, blas_int};
use crate::rotation::{Givens, ModifiedGivens, RotmParam};

const UNIT_STRIDE: blas_int = 1;

/// Converts a slice length to the kernel's length type.
///
/// # Panics
///
/// Panics if `len` does not fit in a signed 32-bit integer.
fn kernel_len(len: usize) -> blas_int {
    match blas_int::try_from(len) {
        Ok(n) => n,
        Err(_) => panic!(
            "length {} exceeds the kernel limit of {} elements",
            len,
            blas_int::MAX
        ),
    }
}

/// Checks that two operands have the same length and returns it in kernel form.
fn matching_len(routine: &str, x: usize, y: usize) -> blas_int {
    assert!(
        x == y,
        "{}: operand lengths differ ({} vs {})",
        routine,
        x,
        y
    );
    kernel_len(x)
}

/// Converts a one-based kernel index into a zero-based one.
fn zero_based(index: blas_int) -> Option<usize> {
    usize::try_from(index).ok()?.checked_sub(1)
}

/// Parses a parameter block written by the kernel.
///
/// # Panics
///
/// Panics if the kernel wrote a flag outside the documented set.
fn kernel_rotm_param(raw: [f64; 5]) -> RotmParam {
    match RotmParam::try_from_raw(raw) {
        Ok(param) => param,
        Err(err) => panic!("drotmg: kernel returned a malformed parameter block: {}", err),
    }
}

// Sealed trait pattern to prevent external implementations
mod private {
    pub trait Sealed {}
    impl Sealed for f64 {}
    impl Sealed for super::Complex64 {}
}

/// Level-1 routines available for both real and complex elements.
///
/// This trait is sealed. It is implemented for `f64` and [`Complex64`].
pub trait Level1: private::Sealed + Copy + Default + PartialEq + fmt::Debug {
    /// `x := alpha * x`
    fn scal(alpha: Self, x: &mut [Self]);

    /// `y := alpha * x + y`
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length.
    fn axpy(alpha: Self, x: &[Self], y: &mut [Self]);

    /// `y := x`
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length.
    fn copy(x: &[Self], y: &mut [Self]);

    /// Exchanges the contents of `x` and `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length.
    fn swap(x: &mut [Self], y: &mut [Self]);

    /// Euclidean norm.
    fn nrm2(x: &[Self]) -> f64;

    /// Sum of `|Re(x_i)| + |Im(x_i)|`.
    fn asum(x: &[Self]) -> f64;

    /// Zero-based index of the first element maximizing `|Re(x_i)| + |Im(x_i)|`,
    /// or `None` for an empty slice.
    fn iamax(x: &[Self]) -> Option<usize>;

    /// Generates a Givens rotation zeroing `b` in `(a, b)`.
    fn rotg(a: Self, b: Self) -> Givens<Self>;

    /// Applies a plane rotation with real cosine `c` and sine `s`:
    /// `x := c*x + s*y`, `y := c*y - conj(s)*x`, using pre-update values.
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length.
    fn rot(x: &mut [Self], y: &mut [Self], c: f64, s: Self);
}

/// Real-only Level-1 routines.
pub trait RealLevel1: Level1 {
    /// `x^T * y`
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length.
    fn dot(x: &[Self], y: &[Self]) -> Self;

    /// Generates a modified Givens rotation zeroing the second component of
    /// `(sqrt(d1) * x1, sqrt(d2) * y1)`.
    ///
    /// # Panics
    ///
    /// Panics if `d1` or `d2` is not finite.
    fn rotmg(d1: Self, d2: Self, x1: Self, y1: Self) -> ModifiedGivens;

    /// Applies `H` to each pair: `x_i := h11*x_i + h12*y_i`, `y_i := h21*x_i + h22*y_i`.
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length.
    fn rotm(x: &mut [Self], y: &mut [Self], param: &RotmParam);
}

/// Complex-only Level-1 products.
pub trait ComplexLevel1: Level1 {
    /// Unconjugated product `x^T * y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length.
    fn dotu(x: &[Self], y: &[Self]) -> Self;

    /// Hermitian product `x^H * y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length.
    fn dotc(x: &[Self], y: &[Self]) -> Self;
}

// region: f64

impl Level1 for f64 {
    fn scal(alpha: Self, x: &mut [Self]) {
        let n = kernel_len(x.len());
        unsafe { ffi::dscal_(&n, &alpha, x.as_mut_ptr(), &UNIT_STRIDE) };
    }

    fn axpy(alpha: Self, x: &[Self], y: &mut [Self]) {
        let n = matching_len("daxpy", x.len(), y.len());
        unsafe {
            ffi::daxpy_(
                &n,
                &alpha,
                x.as_ptr(),
                &UNIT_STRIDE,
                y.as_mut_ptr(),
                &UNIT_STRIDE,
            )
        };
    }

    fn copy(x: &[Self], y: &mut [Self]) {
        let n = matching_len("dcopy", x.len(), y.len());
        unsafe { ffi::dcopy_(&n, x.as_ptr(), &UNIT_STRIDE, y.as_mut_ptr(), &UNIT_STRIDE) };
    }

    fn swap(x: &mut [Self], y: &mut [Self]) {
        let n = matching_len("dswap", x.len(), y.len());
        unsafe { ffi::dswap_(&n, x.as_mut_ptr(), &UNIT_STRIDE, y.as_mut_ptr(), &UNIT_STRIDE) };
    }

    fn nrm2(x: &[Self]) -> f64 {
        let n = kernel_len(x.len());
        unsafe { ffi::dnrm2_(&n, x.as_ptr(), &UNIT_STRIDE) }
    }

    fn asum(x: &[Self]) -> f64 {
        let n = kernel_len(x.len());
        unsafe { ffi::dasum_(&n, x.as_ptr(), &UNIT_STRIDE) }
    }

    fn iamax(x: &[Self]) -> Option<usize> {
        let n = kernel_len(x.len());
        zero_based(unsafe { ffi::idamax_(&n, x.as_ptr(), &UNIT_STRIDE) })
    }

    fn rotg(a: Self, b: Self) -> Givens<Self> {
        let (mut r, mut z) = (a, b);
        let (mut c, mut s) = (0.0, 0.0);
        unsafe { ffi::drotg_(&mut r, &mut z, &mut c, &mut s) };
        Givens { r, z, c, s }
    }

    fn rot(x: &mut [Self], y: &mut [Self], c: f64, s: Self) {
        let n = matching_len("drot", x.len(), y.len());
        unsafe {
            ffi::drot_(
                &n,
                x.as_mut_ptr(),
                &UNIT_STRIDE,
                y.as_mut_ptr(),
                &UNIT_STRIDE,
                &c,
                &s,
            )
        };
    }
}

impl RealLevel1 for f64 {
    fn dot(x: &[Self], y: &[Self]) -> Self {
        let n = matching_len("ddot", x.len(), y.len());
        unsafe { ffi::ddot_(&n, x.as_ptr(), &UNIT_STRIDE, y.as_ptr(), &UNIT_STRIDE) }
    }

    fn rotmg(d1: Self, d2: Self, x1: Self, y1: Self) -> ModifiedGivens {
        assert!(
            d1.is_finite() && d2.is_finite(),
            "drotmg: scale factors must be finite, got d1 = {} and d2 = {}",
            d1,
            d2
        );
        let (mut d1, mut d2, mut x1) = (d1, d2, x1);
        let mut raw = RotmParam::identity().to_raw();
        unsafe { ffi::drotmg_(&mut d1, &mut d2, &mut x1, &y1, raw.as_mut_ptr()) };
        let param = kernel_rotm_param(raw);
        ModifiedGivens { d1, d2, x1, param }
    }

    fn rotm(x: &mut [Self], y: &mut [Self], param: &RotmParam) {
        let n = matching_len("drotm", x.len(), y.len());
        let raw = param.to_raw();
        unsafe {
            ffi::drotm_(
                &n,
                x.as_mut_ptr(),
                &UNIT_STRIDE,
                y.as_mut_ptr(),
                &UNIT_STRIDE,
                raw.as_ptr(),
            )
        };
    }
}

// endregion: f64

// region: Complex64

impl Level1 for Complex64 {
    fn scal(alpha: Self, x: &mut [Self]) {
        let n = kernel_len(x.len());
        unsafe { ffi::zscal_(&n, &alpha, x.as_mut_ptr(), &UNIT_STRIDE) };
    }

    fn axpy(alpha: Self, x: &[Self], y: &mut [Self]) {
        let n = matching_len("zaxpy", x.len(), y.len());
        unsafe {
            ffi::zaxpy_(
                &n,
                &alpha,
                x.as_ptr(),
                &UNIT_STRIDE,
                y.as_mut_ptr(),
                &UNIT_STRIDE,
            )
        };
    }

    fn copy(x: &[Self], y: &mut [Self]) {
        let n = matching_len("zcopy", x.len(), y.len());
        unsafe { ffi::zcopy_(&n, x.as_ptr(), &UNIT_STRIDE, y.as_mut_ptr(), &UNIT_STRIDE) };
    }

    fn swap(x: &mut [Self], y: &mut [Self]) {
        let n = matching_len("zswap", x.len(), y.len());
        unsafe { ffi::zswap_(&n, x.as_mut_ptr(), &UNIT_STRIDE, y.as_mut_ptr(), &UNIT_STRIDE) };
    }

    fn nrm2(x: &[Self]) -> f64 {
        let n = kernel_len(x.len());
        unsafe { ffi::dznrm2_(&n, x.as_ptr(), &UNIT_STRIDE) }
    }

    fn asum(x: &[Self]) -> f64 {
        let n = kernel_len(x.len());
        unsafe { ffi::dzasum_(&n, x.as_ptr(), &UNIT_STRIDE) }
    }

    fn iamax(x: &[Self]) -> Option<usize> {
        let n = kernel_len(x.len());
        zero_based(unsafe { ffi::izamax_(&n, x.as_ptr(), &UNIT_STRIDE) })
    }

    fn rotg(a: Self, b: Self) -> Givens<Self> {
        let mut r = a;
        let mut c = 0.0;
        let mut s = Complex64::default();
        unsafe { ffi::zrotg_(&mut r, &b, &mut c, &mut s) };
        Givens { r, z: b, c, s }
    }

    fn rot(x: &mut [Self], y: &mut [Self], c: f64, s: Self) {
        let n = matching_len("zrot", x.len(), y.len());
        unsafe {
            ffi::zrot_(
                &n,
                x.as_mut_ptr(),
                &UNIT_STRIDE,
                y.as_mut_ptr(),
                &UNIT_STRIDE,
                &c,
                &s,
            )
        };
    }
}

impl ComplexLevel1 for Complex64 {
    fn dotu(x: &[Self], y: &[Self]) -> Self {
        let n = matching_len("zdotu", x.len(), y.len());
        unsafe { ffi::zdotu_(&n, x.as_ptr(), &UNIT_STRIDE, y.as_ptr(), &UNIT_STRIDE) }
    }

    fn dotc(x: &[Self], y: &[Self]) -> Self {
        let n = matching_len("zdotc", x.len(), y.len());
        unsafe { ffi::zdotc_(&n, x.as_ptr(), &UNIT_STRIDE, y.as_ptr(), &UNIT_STRIDE) }
    }
}

// endregion: Complex64

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::RotmFlag;

    fn assert_almost_equal(left: f64, right: f64, tolerance: f64) {
        let lower = right - tolerance;
        let upper = right + tolerance;

        assert!(
            left >= lower && left <= upper,
            "expected {} but got {}, tolerance {}",
            right,
            left,
            tolerance
        );
    }

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn axpy_f64() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut y = [5.0, 4.0, 3.0, 2.0, 1.0];
        f64::axpy(2.0, &x, &mut y);
        assert_eq!(y, [7.0, 8.0, 9.0, 10.0, 11.0]);
    }

    #[test]
    fn scal_f64() {
        let mut x = [1.0, -2.0, 3.0];
        f64::scal(-0.5, &mut x);
        assert_eq!(x, [-0.5, 1.0, -1.5]);
    }

    #[test]
    fn copy_and_swap_f64() {
        let x = [1.0, 2.0];
        let mut y = [0.0, 0.0];
        f64::copy(&x, &mut y);
        assert_eq!(y, x);

        let mut a = [1.0, 2.0];
        let mut b = [3.0, 4.0];
        f64::swap(&mut a, &mut b);
        assert_eq!(a, [3.0, 4.0]);
        assert_eq!(b, [1.0, 2.0]);
    }

    #[test]
    fn dot_f64() {
        assert_eq!(f64::dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(f64::dot(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(f64::dot(&[], &[]), 0.0);
    }

    #[test]
    fn norms_f64() {
        assert_almost_equal(f64::nrm2(&[3.0, 4.0]), 5.0, 1e-12);
        assert_almost_equal(f64::nrm2(&[1.0; 9]), 3.0, 1e-12);
        assert_eq!(f64::nrm2(&[]), 0.0);
        assert_eq!(f64::asum(&[1.0, -2.0, 3.0]), 6.0);
    }

    #[test]
    fn norm2_avoids_overflow() {
        let big = 1e300;
        assert_almost_equal(f64::nrm2(&[big, big]) / big, 2f64.sqrt(), 1e-12);
    }

    #[test]
    fn norm2_of_infinite_components() {
        let inf = f64::INFINITY;
        assert_eq!(f64::nrm2(&[inf, inf]), inf);
        assert_eq!(f64::nrm2(&[1.0, -inf, 2.0, inf]), inf);
        assert_eq!(Complex64::nrm2(&[c(inf, inf)]), inf);
        assert_eq!(Complex64::nrm2(&[c(1.0, 0.0), c(-inf, 3.0), c(inf, 0.0)]), inf);
        assert!(f64::nrm2(&[inf, f64::NAN]).is_nan());
        assert!(f64::nrm2(&[f64::NAN, inf]).is_nan());
    }

    #[test]
    fn iamax_f64() {
        assert_eq!(f64::iamax(&[3.0, -5.0, 2.0, -5.0]), Some(1));
        assert_eq!(f64::iamax(&[7.0]), Some(0));
        assert_eq!(f64::iamax(&[]), None);
    }

    #[test]
    fn rotg_zeroes_second_component() {
        let (a, b) = (3.0, 4.0);
        let g = f64::rotg(a, b);
        assert_almost_equal(g.r, 5.0, 1e-12);
        assert_almost_equal(g.c, 0.6, 1e-12);
        assert_almost_equal(g.s, 0.8, 1e-12);
        assert_almost_equal(g.z, 1.0 / 0.6, 1e-12);

        let mut x = [a];
        let mut y = [b];
        f64::rot(&mut x, &mut y, g.c, g.s);
        assert_almost_equal(x[0], g.r, 1e-12);
        assert_almost_equal(y[0], 0.0, 1e-12);
    }

    #[test]
    fn rotg_of_zero_pair() {
        let g = f64::rotg(0.0, 0.0);
        assert_eq!((g.r, g.z, g.c, g.s), (0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn rotmg_zeroes_second_component() {
        for (d1, d2, x1, y1) in [(1.0, 1.0, 3.0, 1.0), (1.0, 1.0, 1.0, 3.0), (2.0, 0.5, -1.0, 4.0)] {
            let m = f64::rotmg(d1, d2, x1, y1);
            assert_ne!(m.param.flag, RotmFlag::Identity);

            let mut x = [x1];
            let mut y = [y1];
            f64::rotm(&mut x, &mut y, &m.param);
            assert_almost_equal(x[0], m.x1, 1e-12);
            assert_almost_equal(y[0], 0.0, 1e-12);
        }
    }

    #[test]
    fn rotmg_forms() {
        // |d1 x1^2| > |d2 y1^2| selects the off-diagonal form.
        let m = f64::rotmg(1.0, 1.0, 3.0, 1.0);
        assert_eq!(m.param.flag, RotmFlag::OffDiagonal);
        assert_almost_equal(m.param.h21, -1.0 / 3.0, 1e-12);
        assert_almost_equal(m.param.h12, 1.0 / 3.0, 1e-12);

        let m = f64::rotmg(1.0, 1.0, 1.0, 3.0);
        assert_eq!(m.param.flag, RotmFlag::Diagonal);

        // A zero second component needs no rotation.
        let m = f64::rotmg(1.0, 1.0, 2.0, 0.0);
        assert_eq!(m.param.flag, RotmFlag::Identity);
        assert_eq!((m.d1, m.d2, m.x1), (1.0, 1.0, 2.0));

        // A negative scale factor zeroes everything.
        let m = f64::rotmg(-1.0, 1.0, 2.0, 3.0);
        assert_eq!(m.param.flag, RotmFlag::Full);
        assert_eq!((m.d1, m.d2, m.x1), (0.0, 0.0, 0.0));
    }

    #[test]
    fn rotm_follows_flag() {
        let param = RotmParam::full(1.0, 2.0, 3.0, 4.0);
        let mut x = [1.0, 0.0];
        let mut y = [0.0, 1.0];
        f64::rotm(&mut x, &mut y, &param);
        assert_eq!(x, [1.0, 3.0]);
        assert_eq!(y, [2.0, 4.0]);

        let mut x = [1.0];
        let mut y = [1.0];
        f64::rotm(&mut x, &mut y, &RotmParam::identity());
        assert_eq!((x[0], y[0]), (1.0, 1.0));

        let mut x = [1.0];
        let mut y = [1.0];
        f64::rotm(&mut x, &mut y, &RotmParam::diagonal(2.0, 3.0));
        assert_eq!((x[0], y[0]), (3.0, 2.0));
    }

    #[test]
    #[should_panic(expected = "operand lengths differ")]
    fn mismatched_lengths_panic() {
        let mut y = [0.0; 3];
        f64::axpy(1.0, &[1.0, 2.0], &mut y);
    }

    #[test]
    fn axpy_complex() {
        let x = [c(1.0, 1.0), c(0.0, 2.0)];
        let mut y = [c(1.0, 0.0), c(1.0, 1.0)];
        Complex64::axpy(c(0.0, 1.0), &x, &mut y);
        assert_eq!(y, [c(0.0, 1.0), c(-1.0, 1.0)]);
    }

    #[test]
    fn scal_complex() {
        let mut x = [c(1.0, 2.0), c(-1.0, 0.5)];
        Complex64::scal(c(0.0, 2.0), &mut x);
        assert_eq!(x, [c(-4.0, 2.0), c(-1.0, -2.0)]);
    }

    #[test]
    fn dot_complex() {
        let x = [c(1.0, 2.0), c(3.0, -1.0)];
        let y = [c(2.0, 1.0), c(0.0, 1.0)];
        // (1+2i)(2+i) + (3-i)(i) = (0+5i) + (1+3i)
        assert_eq!(Complex64::dotu(&x, &y), c(1.0, 8.0));
        // (1-2i)(2+i) + (3+i)(i) = (4-3i) + (-1+3i)
        assert_eq!(Complex64::dotc(&x, &y), c(3.0, 0.0));
    }

    #[test]
    fn norms_complex() {
        let x = [c(3.0, 4.0), c(0.0, 0.0), c(-1.0, 2.0)];
        assert_almost_equal(Complex64::nrm2(&x), 30f64.sqrt(), 1e-12);
        assert_eq!(Complex64::asum(&x), 10.0);
    }

    #[test]
    fn iamax_complex_uses_component_sum() {
        // |3+4i| = 5 has the largest modulus, but |-1+6.5i| has the larger |Re| + |Im|.
        let x = [c(3.0, 4.0), c(-1.0, 6.5), c(0.0, 7.5)];
        assert_eq!(Complex64::iamax(&x), Some(1));
        assert_eq!(Complex64::iamax(&[]), None);
    }

    #[test]
    fn rotg_complex() {
        let (a, b) = (c(3.0, 0.0), c(0.0, 4.0));
        let g = Complex64::rotg(a, b);
        assert_almost_equal(g.c, 0.6, 1e-12);
        assert_almost_equal(g.r.re, 5.0, 1e-12);
        assert_almost_equal(g.r.im, 0.0, 1e-12);
        assert_eq!(g.z, b);

        let mut x = [a];
        let mut y = [b];
        Complex64::rot(&mut x, &mut y, g.c, g.s);
        assert_almost_equal((x[0] - g.r).norm(), 0.0, 1e-12);
        assert_almost_equal(y[0].norm(), 0.0, 1e-12);
    }

    #[test]
    fn rotg_complex_zero_first_component() {
        let g = Complex64::rotg(c(0.0, 0.0), c(1.0, 2.0));
        assert_eq!(g.c, 0.0);
        assert_eq!(g.s, c(1.0, 0.0));
        assert_eq!(g.r, c(1.0, 2.0));
    }

    #[test]
    #[should_panic(expected = "scale factors must be finite")]
    fn rotmg_rejects_infinite_first_scale() {
        f64::rotmg(f64::INFINITY, 1.0, 1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "scale factors must be finite")]
    fn rotmg_rejects_infinite_second_scale() {
        f64::rotmg(1.0, f64::NEG_INFINITY, 1.0, 1.0);
    }

    #[test]
    fn rotmg_accepts_large_finite_scales() {
        let m = f64::rotmg(1e300, 1.0, 1.0, 1.0);
        assert_eq!(m.param.flag, RotmFlag::Full);
        assert!(m.d1.is_finite() && m.d2.is_finite());
    }

    #[test]
    fn kernel_block_parses_documented_flags() {
        let param = kernel_rotm_param([0.0, 1.0, -0.5, 0.25, 1.0]);
        assert_eq!(param, RotmParam::off_diagonal(-0.5, 0.25));
    }

    #[test]
    #[should_panic(expected = "invalid modified rotation flag: 3")]
    fn kernel_block_with_unknown_flag_panics() {
        kernel_rotm_param([3.0, 0.0, 0.0, 0.0, 0.0]);
    }
}
