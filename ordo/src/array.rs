//! One-indexed, bounds-checked dynamic array
//!
//! `BoundedArray` owns a single contiguous buffer. Every positional access
//! goes through [`validate_index`] before touching storage, so an invalid
//! index is reported as an error and never reads or writes the wrong cell.

use std::fmt;

use ordo_core::{validate_index, Element, OneIndexed, Result, SignedElement};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::random::UniformRange;
use crate::storage;

/// Fixed-length, one-indexed sequence of elements
///
/// Cloning produces a fully independent deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedArray<T> {
    data: Vec<T>,
}

impl<T: Element> BoundedArray<T> {
    /// Create a zero-filled array of `length` elements
    pub fn new(length: usize) -> Result<Self> {
        Ok(Self {
            data: storage::zeroed(length)?,
        })
    }

    /// Create an array holding a copy of `values`
    pub fn from_slice(values: &[T]) -> Result<Self> {
        Ok(Self {
            data: storage::copied(values)?,
        })
    }

    /// Take ownership of an existing buffer
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Zero-based view of the contents
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable zero-based view of the contents
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the array, returning its buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element + SampleUniform> BoundedArray<T> {
    /// Fill every element uniformly from `range`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, range: UniformRange<T>) {
        tracing::trace!(length = self.data.len(), "randomizing array");
        for value in &mut self.data {
            *value = range.sample(rng);
        }
    }

    /// Fill every element uniformly from `[1, 30]`
    pub fn randomize_default<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.randomize(rng, UniformRange::array_default());
    }
}

impl<T: SignedElement + SampleUniform> BoundedArray<T> {
    /// Fill the array as a random walk starting from zero
    ///
    /// Each element is the previous one plus an increment drawn from `range`.
    pub fn randomize_walk<R: Rng + ?Sized>(&mut self, rng: &mut R, range: UniformRange<T>) {
        tracing::trace!(length = self.data.len(), "randomizing array as a walk");
        let mut previous = T::ZERO;
        for value in &mut self.data {
            previous = previous + range.sample(rng);
            *value = previous;
        }
    }

    /// Random walk with increments drawn from `[-3, 5]`
    pub fn randomize_walk_default<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.randomize_walk(rng, UniformRange::walk_default());
    }
}

impl<T: Element> OneIndexed for BoundedArray<T> {
    type Element = T;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        validate_index(index, self.data.len())
            .ok()
            .map(|offset| self.data[offset])
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        let offset = validate_index(index, self.data.len())?;
        self.data[offset] = value;
        Ok(())
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let first = validate_index(a, self.data.len())?;
        let second = validate_index(b, self.data.len())?;
        self.data.swap(first, second);
        Ok(())
    }
}

impl<T, const N: usize> From<[T; N]> for BoundedArray<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            data: Vec::from(values),
        }
    }
}

impl<T: fmt::Display> fmt::Display for BoundedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
