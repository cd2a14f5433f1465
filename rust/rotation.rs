//! Plane rotation parameters.
//!
//! - [`Givens`]: result of generating a Givens rotation, real or complex.
//! - [`ModifiedGivens`]: result of generating a modified (fast) Givens rotation.
//! - [`RotmParam`]: the 2×2 transform `H` of a modified rotation, with its
//!   [`RotmFlag`] selecting which entries are implied.

use crate::error::{Result, VectorError};

/// Parameters of a Givens rotation generated from the pair `(a, b)`.
///
/// Applying `(c, s)` to `(a, b)` yields `(r, 0)`. For complex rotations the
/// cosine stays real and the sine is complex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Givens<T> {
    /// The rotated first component.
    pub r: T,
    /// Reconstruction value left by the kernel in place of `b`.
    pub z: T,
    /// Cosine.
    pub c: f64,
    /// Sine.
    pub s: T,
}

/// Form of the modified rotation matrix `H`, stored as `param[0]` of the raw block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotmFlag {
    /// `H = [[h11, h12], [h21, h22]]`
    Full,
    /// `H = [[1, h12], [h21, 1]]`
    OffDiagonal,
    /// `H = [[h11, 1], [-1, h22]]`
    Diagonal,
    /// `H = I`
    Identity,
}

impl RotmFlag {
    /// Discriminant as understood by the kernel.
    pub fn code(self) -> f64 {
        match self {
            RotmFlag::Full => -1.0,
            RotmFlag::OffDiagonal => 0.0,
            RotmFlag::Diagonal => 1.0,
            RotmFlag::Identity => -2.0,
        }
    }

    pub fn from_code(code: f64) -> Option<Self> {
        if code == -1.0 {
            Some(RotmFlag::Full)
        } else if code == 0.0 {
            Some(RotmFlag::OffDiagonal)
        } else if code == 1.0 {
            Some(RotmFlag::Diagonal)
        } else if code == -2.0 {
            Some(RotmFlag::Identity)
        } else {
            None
        }
    }
}

/// Modified rotation transform `H`.
///
/// Entries that the flag implies are kept as stored but ignored when the
/// transform is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotmParam {
    pub flag: RotmFlag,
    pub h11: f64,
    pub h21: f64,
    pub h12: f64,
    pub h22: f64,
}

impl RotmParam {
    pub fn identity() -> Self {
        Self {
            flag: RotmFlag::Identity,
            h11: 0.0,
            h21: 0.0,
            h12: 0.0,
            h22: 0.0,
        }
    }

    pub fn full(h11: f64, h21: f64, h12: f64, h22: f64) -> Self {
        Self {
            flag: RotmFlag::Full,
            h11,
            h21,
            h12,
            h22,
        }
    }

    pub fn off_diagonal(h21: f64, h12: f64) -> Self {
        Self {
            flag: RotmFlag::OffDiagonal,
            h11: 1.0,
            h21,
            h12,
            h22: 1.0,
        }
    }

    pub fn diagonal(h11: f64, h22: f64) -> Self {
        Self {
            flag: RotmFlag::Diagonal,
            h11,
            h21: -1.0,
            h12: 1.0,
            h22,
        }
    }

    /// Raw five-element block `[flag, h11, h21, h12, h22]`.
    pub fn to_raw(&self) -> [f64; 5] {
        [self.flag.code(), self.h11, self.h21, self.h12, self.h22]
    }

    /// Parses a raw block, failing if `raw[0]` is not a known flag.
    pub fn try_from_raw(raw: [f64; 5]) -> Result<Self> {
        let flag = RotmFlag::from_code(raw[0]).ok_or(VectorError::InvalidRotmFlag(raw[0]))?;
        Ok(Self {
            flag,
            h11: raw[1],
            h21: raw[2],
            h12: raw[3],
            h22: raw[4],
        })
    }

    /// The effective matrix, with implied entries filled in according to the flag.
    pub fn matrix(&self) -> [[f64; 2]; 2] {
        match self.flag {
            RotmFlag::Full => [[self.h11, self.h12], [self.h21, self.h22]],
            RotmFlag::OffDiagonal => [[1.0, self.h12], [self.h21, 1.0]],
            RotmFlag::Diagonal => [[self.h11, 1.0], [-1.0, self.h22]],
            RotmFlag::Identity => [[1.0, 0.0], [0.0, 1.0]],
        }
    }
}

impl Default for RotmParam {
    fn default() -> Self {
        Self::identity()
    }
}

/// Result of generating a modified Givens rotation from `(d1, d2, x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifiedGivens {
    /// Updated first scale factor.
    pub d1: f64,
    /// Updated second scale factor.
    pub d2: f64,
    /// Updated first component.
    pub x1: f64,
    /// The transform zeroing the second component.
    pub param: RotmParam,
}
