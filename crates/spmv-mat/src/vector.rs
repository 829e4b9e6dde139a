//! Fixed-length, arena-resident numeric vectors.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use spmv_arena::{Arena, ArenaError, Handle};
use spmv_core::{AccessError, ElemKind, Scalar};

/// Smallest value produced by [`Vector::fill_random`].
pub const RAND_MIN: i64 = 0;
/// Largest value produced by [`Vector::fill_random`].
pub const RAND_MAX: i64 = 99;

/// A fixed-length, homogeneously typed numeric array backed by the arena.
///
/// The element kind is set at construction and immutable. Every accessor is
/// bounds-checked and kind-checked: a real accessor on an integer vector is
/// an [`AccessError::KindMismatch`], never a coercion.
#[derive(Clone, Copy, Debug)]
pub struct Vector {
    len: usize,
    kind: ElemKind,
    values: Handle,
}

impl Vector {
    /// Allocate a zero-filled vector of `len` elements.
    pub fn new(arena: &mut Arena, len: usize, kind: ElemKind) -> Result<Self, ArenaError> {
        let values = arena.alloc(len)?;
        Ok(Self { len, kind, values })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector has zero elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The element kind tag.
    pub fn kind(&self) -> ElemKind {
        self.kind
    }

    /// The handle of the value array.
    pub fn handle(&self) -> Handle {
        self.values
    }

    fn check<S: Scalar>(&self, index: usize) -> Result<(), AccessError> {
        if S::KIND != self.kind {
            return Err(AccessError::KindMismatch {
                expected: S::KIND,
                found: self.kind,
            });
        }
        if index >= self.len {
            return Err(AccessError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Read the element at `index`.
    pub fn get<S: Scalar>(&self, arena: &Arena, index: usize) -> Result<S, AccessError> {
        self.check::<S>(index)?;
        Ok(S::from_word(arena.words(self.values)[index]))
    }

    /// Write the element at `index`.
    pub fn set<S: Scalar>(
        &self,
        arena: &mut Arena,
        index: usize,
        value: S,
    ) -> Result<(), AccessError> {
        self.check::<S>(index)?;
        arena.words_mut(self.values)[index] = value.to_word();
        Ok(())
    }

    /// Fill every element with a constant.
    pub fn fill<S: Scalar>(&self, arena: &mut Arena, value: S) -> Result<(), AccessError> {
        if S::KIND != self.kind {
            return Err(AccessError::KindMismatch {
                expected: S::KIND,
                found: self.kind,
            });
        }
        arena.words_mut(self.values).fill(value.to_word());
        Ok(())
    }

    /// Fill every element with a value drawn uniformly from
    /// `[RAND_MIN, RAND_MAX]`.
    ///
    /// Deterministic for a given seed (ChaCha8), so benchmark inputs are
    /// reproducible across runs and thread counts.
    pub fn fill_random(&self, arena: &mut Arena, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let words = arena.words_mut(self.values);
        match self.kind {
            ElemKind::Real => {
                for word in words.iter_mut() {
                    let v: f64 = rng.random_range(RAND_MIN as f64..=RAND_MAX as f64);
                    *word = v.to_word();
                }
            }
            ElemKind::Integer => {
                for word in words.iter_mut() {
                    let v: i64 = rng.random_range(RAND_MIN..=RAND_MAX);
                    *word = v.to_word();
                }
            }
        }
    }

    /// Copy the contents out as a plain `Vec`.
    pub fn to_vec<S: Scalar>(&self, arena: &Arena) -> Result<Vec<S>, AccessError> {
        if S::KIND != self.kind {
            return Err(AccessError::KindMismatch {
                expected: S::KIND,
                found: self.kind,
            });
        }
        Ok(arena
            .words(self.values)
            .iter()
            .map(|&w| S::from_word(w))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vector_is_zeroed() {
        let mut arena = Arena::with_defaults();
        let v = Vector::new(&mut arena, 5, ElemKind::Real).unwrap();
        for i in 0..5 {
            assert_eq!(v.get::<f64>(&arena, i).unwrap(), 0.0);
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut arena = Arena::with_defaults();
        let v = Vector::new(&mut arena, 3, ElemKind::Integer).unwrap();
        v.set::<i64>(&mut arena, 1, -7).unwrap();
        assert_eq!(v.get::<i64>(&arena, 1).unwrap(), -7);
    }

    #[test]
    fn out_of_bounds_access_rejected() {
        let mut arena = Arena::with_defaults();
        let v = Vector::new(&mut arena, 3, ElemKind::Real).unwrap();
        let err = v.get::<f64>(&arena, 3).unwrap_err();
        assert_eq!(err, AccessError::OutOfBounds { index: 3, len: 3 });
    }

    #[test]
    fn kind_mismatch_rejected_not_coerced() {
        let mut arena = Arena::with_defaults();
        let v = Vector::new(&mut arena, 3, ElemKind::Integer).unwrap();
        let err = v.get::<f64>(&arena, 0).unwrap_err();
        assert_eq!(
            err,
            AccessError::KindMismatch {
                expected: ElemKind::Real,
                found: ElemKind::Integer,
            }
        );
    }

    #[test]
    fn fill_sets_every_element() {
        let mut arena = Arena::with_defaults();
        let v = Vector::new(&mut arena, 4, ElemKind::Real).unwrap();
        v.fill::<f64>(&mut arena, 2.5).unwrap();
        assert_eq!(v.to_vec::<f64>(&arena).unwrap(), vec![2.5; 4]);
    }

    #[test]
    fn fill_random_is_deterministic_and_in_range() {
        let mut arena = Arena::with_defaults();
        let a = Vector::new(&mut arena, 64, ElemKind::Real).unwrap();
        let b = Vector::new(&mut arena, 64, ElemKind::Real).unwrap();
        a.fill_random(&mut arena, 42);
        b.fill_random(&mut arena, 42);
        let av = a.to_vec::<f64>(&arena).unwrap();
        let bv = b.to_vec::<f64>(&arena).unwrap();
        assert_eq!(av, bv);
        assert!(av
            .iter()
            .all(|&x| (RAND_MIN as f64..=RAND_MAX as f64).contains(&x)));
    }

    #[test]
    fn fill_random_integer_in_range() {
        let mut arena = Arena::with_defaults();
        let v = Vector::new(&mut arena, 64, ElemKind::Integer).unwrap();
        v.fill_random(&mut arena, 7);
        assert!(v
            .to_vec::<i64>(&arena)
            .unwrap()
            .iter()
            .all(|&x| (RAND_MIN..=RAND_MAX).contains(&x)));
    }

    #[test]
    fn empty_vector_is_fine() {
        let mut arena = Arena::with_defaults();
        let v = Vector::new(&mut arena, 0, ElemKind::Real).unwrap();
        assert!(v.is_empty());
        v.fill_random(&mut arena, 0);
    }
}
