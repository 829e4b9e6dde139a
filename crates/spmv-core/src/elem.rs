//! Element kinds and word transcoding.
//!
//! The arena hands out untyped `u64` words. A [`Scalar`] implementation
//! maps those words to one concrete element type: `f64` round-trips its
//! IEEE-754 bit pattern, `i64` its two's-complement pattern. Both
//! conversions are bitwise moves and compile to nothing.

use std::fmt;
use std::ops::{Add, Mul};

/// Element type tag for vectors and matrices.
///
/// Set once at construction and immutable afterwards. Accessors that do
/// not match the tag fail with a kind-mismatch error rather than coercing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElemKind {
    /// 64-bit IEEE-754 floating point elements.
    Real,
    /// 64-bit signed integer elements.
    Integer,
}

impl fmt::Display for ElemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Integer => write!(f, "integer"),
        }
    }
}

/// A numeric element type storable as one arena word.
///
/// Implemented exactly twice (`f64`, `i64`). Algorithms generic over
/// `Scalar` get two monomorphized instantiations instead of a runtime
/// branch per element.
pub trait Scalar:
    Copy + PartialEq + fmt::Debug + fmt::Display + Add<Output = Self> + Mul<Output = Self>
{
    /// The tag this scalar corresponds to.
    const KIND: ElemKind;
    /// Additive identity.
    const ZERO: Self;

    /// Decode a scalar from an arena word.
    fn from_word(word: u64) -> Self;

    /// Encode this scalar as an arena word.
    fn to_word(self) -> u64;

    /// Fused accumulate: `acc + a * b`.
    ///
    /// Integer accumulation wraps on overflow rather than panicking,
    /// matching two's-complement semantics.
    fn mul_add_acc(acc: Self, a: Self, b: Self) -> Self;
}

impl Scalar for f64 {
    const KIND: ElemKind = ElemKind::Real;
    const ZERO: Self = 0.0;

    fn from_word(word: u64) -> Self {
        f64::from_bits(word)
    }

    fn to_word(self) -> u64 {
        self.to_bits()
    }

    fn mul_add_acc(acc: Self, a: Self, b: Self) -> Self {
        acc + a * b
    }
}

impl Scalar for i64 {
    const KIND: ElemKind = ElemKind::Integer;
    const ZERO: Self = 0;

    fn from_word(word: u64) -> Self {
        word as i64
    }

    fn to_word(self) -> u64 {
        self as u64
    }

    fn mul_add_acc(acc: Self, a: Self, b: Self) -> Self {
        acc.wrapping_add(a.wrapping_mul(b))
    }
}
