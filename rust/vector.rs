//! Dense vectors backed by the Level-1 kernel.
//!
//! [`Vector`] owns a contiguous buffer of `f64` or [`Complex64`](num_complex::Complex64)
//! elements and forwards its operations to the kernel routine matching the
//! element type. Real-only and complex-only operations are only available on
//! the corresponding element type.
//!
//! # Example
//!
//! ```rust
//! use fvec::Vector;
//!
//! let x = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
//! let mut y = Vector::from_slice(&[5.0, 4.0, 3.0, 2.0, 1.0]);
//!
//! // y := alpha * x + y
//! y.axpy(2.0, &x);
//! assert_eq!(y.as_slice(), &[7.0, 8.0, 9.0, 10.0, 11.0]);
//! assert_eq!(y.to_string(), "[ 7 8 9 10 11 ]");
//! ```

use core::fmt;
use core::ops::{Index, IndexMut};
use core::ptr::NonNull;
use std::alloc::Layout;

use tracing::{debug, warn};

use crate::allocator::{Allocator, Global};
use crate::error::{Result, VectorError};
use crate::level1::{ComplexLevel1, Level1, RealLevel1};
use crate::rotation::{Givens, ModifiedGivens, RotmParam};

/// Allocates an uninitialized buffer for `len` elements; nothing is allocated for `len == 0`.
fn allocate_buffer<T, A: Allocator>(len: usize, alloc: &A) -> Result<NonNull<T>> {
    if len == 0 {
        return Ok(NonNull::dangling());
    }
    let layout = Layout::array::<T>(len).map_err(|_| {
        warn!(len, "vector length overflows the address space");
        VectorError::AllocationFailed { len }
    })?;
    match alloc.allocate(layout) {
        Some(ptr) => {
            debug!(len, bytes = layout.size(), "allocated vector buffer");
            Ok(ptr.cast())
        }
        None => {
            warn!(len, bytes = layout.size(), "vector buffer allocation refused");
            Err(VectorError::AllocationFailed { len })
        }
    }
}

/// A fixed-length dense vector of `f64` or `Complex64` elements.
///
/// The buffer is exclusively owned: [`Clone`] deep-copies it, and no buffer
/// is held when the length is zero. Operations taking a second vector accept
/// any allocator for it.
pub struct Vector<T, A: Allocator = Global> {
    /// Start of the buffer, dangling when `len == 0`.
    data: NonNull<T>,
    /// Number of elements.
    len: usize,
    /// Allocator instance.
    alloc: A,
}

// Safety: Vector owns its data and T: Send implies the buffer is Send
unsafe impl<T: Send, A: Allocator + Send> Send for Vector<T, A> {}
// Safety: Vector has no interior mutability, &Vector<T> is safe to share if T: Sync
unsafe impl<T: Sync, A: Allocator + Sync> Sync for Vector<T, A> {}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }
        unsafe {
            core::ptr::drop_in_place(core::ptr::slice_from_raw_parts_mut(
                self.data.as_ptr(),
                self.len,
            ));
            if let Ok(layout) = Layout::array::<T>(self.len) {
                self.alloc.deallocate(self.data.cast(), layout);
            }
        }
    }
}

// Construction with a custom allocator
impl<T: Level1, A: Allocator> Vector<T, A> {
    /// Creates a zero-filled vector of `len` elements using a custom allocator.
    ///
    /// Returns `Err` if the allocator cannot provide the buffer.
    pub fn try_new_in(len: usize, alloc: A) -> Result<Self> {
        let data = allocate_buffer::<T, A>(len, &alloc)?;
        unsafe {
            for i in 0..len {
                core::ptr::write(data.as_ptr().add(i), T::default());
            }
        }
        Ok(Self { data, len, alloc })
    }

    /// Creates a vector holding a copy of `values` using a custom allocator.
    ///
    /// Returns `Err` if the allocator cannot provide the buffer.
    pub fn try_from_slice_in(values: &[T], alloc: A) -> Result<Self> {
        let data = allocate_buffer::<T, A>(values.len(), &alloc)?;
        unsafe {
            core::ptr::copy_nonoverlapping(values.as_ptr(), data.as_ptr(), values.len());
        }
        Ok(Self {
            data,
            len: values.len(),
            alloc,
        })
    }

    /// Returns a reference to the allocator.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }
}

// Methods that don't touch the kernel
impl<T, A: Allocator> Vector<T, A> {
    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the vector has no elements (and owns no buffer).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a pointer to the data.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns a mutable pointer to the data.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Exchanges buffers, lengths and allocators with `other` without touching
    /// any element. Unlike [`Vector::swap`], the lengths may differ.
    pub fn swap_buffers(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

// Kernel operations shared by real and complex vectors
impl<T: Level1, A: Allocator> Vector<T, A> {
    /// In place: every element is multiplied by `alpha`.
    pub fn scale(&mut self, alpha: T) {
        T::scal(alpha, self.as_mut_slice());
    }

    /// In place: `self := alpha * x + self`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ or the vectors are empty.
    pub fn axpy<B: Allocator>(&mut self, alpha: T, x: &Vector<T, B>) {
        assert!(
            self.len == x.len() && !self.is_empty(),
            "axpy: expected two non-empty vectors of equal length, got {} and {}",
            self.len,
            x.len()
        );
        T::axpy(alpha, x.as_slice(), self.as_mut_slice());
    }

    /// In place: `self := x`, element by element. The buffers stay independent.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn copy_from<B: Allocator>(&mut self, x: &Vector<T, B>) {
        T::copy(x.as_slice(), self.as_mut_slice());
    }

    /// Exchanges the elements of `self` and `x`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn swap<B: Allocator>(&mut self, x: &mut Vector<T, B>) {
        T::swap(self.as_mut_slice(), x.as_mut_slice());
    }

    /// Euclidean norm `sqrt(sum |e_i|^2)`.
    pub fn norm2(&self) -> f64 {
        T::nrm2(self.as_slice())
    }

    /// Sum of component magnitudes `sum |Re(e_i)| + |Im(e_i)|`.
    ///
    /// For complex vectors this is not the sum of moduli.
    pub fn norm1(&self) -> f64 {
        T::asum(self.as_slice())
    }

    /// Zero-based index of the first element maximizing `|Re(e_i)| + |Im(e_i)|`.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn arg_abs_max(&self) -> usize {
        match T::iamax(self.as_slice()) {
            Some(index) => index,
            None => panic!("arg_abs_max: vector is empty"),
        }
    }

    /// Generates the Givens rotation zeroing `b` in `(a, b)`.
    pub fn generate_rotation(a: T, b: T) -> Givens<T> {
        T::rotg(a, b)
    }

    /// In place, using pre-update values:
    /// `self := c*self + s*x` and `x := c*x - conj(s)*self`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn apply_rotation<B: Allocator>(&mut self, x: &mut Vector<T, B>, c: f64, s: T) {
        T::rot(self.as_mut_slice(), x.as_mut_slice(), c, s);
    }
}

// Real-only operations
impl<T: RealLevel1, A: Allocator> Vector<T, A> {
    /// Inner product `sum x_i * self_i`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn dot<B: Allocator>(&self, x: &Vector<T, B>) -> T {
        T::dot(x.as_slice(), self.as_slice())
    }

    /// Generates the modified Givens rotation for `(d1, d2, x1, y1)`.
    ///
    /// # Panics
    ///
    /// Panics if `d1` or `d2` is not finite.
    pub fn generate_modified_rotation(d1: T, d2: T, x1: T, y1: T) -> ModifiedGivens {
        T::rotmg(d1, d2, x1, y1)
    }

    /// In place, using pre-update values:
    /// `self := h11*self + h12*x` and `x := h21*self + h22*x`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn apply_modified_rotation<B: Allocator>(&mut self, x: &mut Vector<T, B>, param: &RotmParam) {
        T::rotm(self.as_mut_slice(), x.as_mut_slice(), param);
    }
}

// Complex-only operations
impl<T: ComplexLevel1, A: Allocator> Vector<T, A> {
    /// Unconjugated product `sum x_i * self_i`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn dotu<B: Allocator>(&self, x: &Vector<T, B>) -> T {
        T::dotu(x.as_slice(), self.as_slice())
    }

    /// Hermitian product `sum conj(x_i) * self_i`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn dotc<B: Allocator>(&self, x: &Vector<T, B>) -> T {
        T::dotc(x.as_slice(), self.as_slice())
    }
}

impl<T: Level1, A: Allocator + Clone> Vector<T, A> {
    /// Deep copy that reports allocation failure instead of panicking.
    pub fn try_clone(&self) -> Result<Self> {
        debug!(len = self.len, "deep-copying vector");
        Self::try_from_slice_in(self.as_slice(), self.alloc.clone())
    }
}

impl<T: Level1, A: Allocator + Clone> Clone for Vector<T, A> {
    fn clone(&self) -> Self {
        self.try_clone().expect("clone allocation failed")
    }

    fn clone_from(&mut self, source: &Self) {
        // Copy-and-swap: the old buffer is released with `fresh`.
        let mut fresh = source.clone();
        self.swap_buffers(&mut fresh);
    }
}

// Convenience methods using Global allocator
impl<T: Level1> Vector<T, Global> {
    /// Creates a zero-filled vector using the global allocator.
    ///
    /// Returns `Err` if allocation fails.
    pub fn try_new(len: usize) -> Result<Self> {
        Self::try_new_in(len, Global)
    }

    /// Creates a vector from existing slice data using the global allocator.
    ///
    /// Returns `Err` if allocation fails.
    pub fn try_from_slice(values: &[T]) -> Result<Self> {
        Self::try_from_slice_in(values, Global)
    }

    /// An empty vector owning no buffer.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Convenience constructor that panics on error.
    pub fn new(len: usize) -> Self {
        Self::try_new(len).expect("Vector::new failed")
    }

    /// Convenience constructor that panics on error.
    pub fn from_slice(values: &[T]) -> Self {
        Self::try_from_slice(values).expect("Vector::from_slice failed")
    }
}

impl<T, A: Allocator + Default> Default for Vector<T, A> {
    /// An empty vector owning no buffer.
    fn default() -> Self {
        Self {
            data: NonNull::dangling(),
            len: 0,
            alloc: A::default(),
        }
    }
}

impl<T, A: Allocator> Index<usize> for Vector<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T, A: Allocator> IndexMut<usize> for Vector<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, A: Allocator> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq, A: Allocator, B: Allocator> PartialEq<Vector<T, B>> for Vector<T, A> {
    fn eq(&self, other: &Vector<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("len", &self.len)
            .field("data", &self.as_slice())
            .finish()
    }
}

/// Space-separated elements in brackets, e.g. `[ 1 2 3 ]`.
impl<T: fmt::Display, A: Allocator> fmt::Display for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for value in self.iter() {
            write!(f, " {}", value)?;
        }
        write!(f, " ]")
    }
}
