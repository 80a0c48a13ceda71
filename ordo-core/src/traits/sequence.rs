//! One-indexed sequence access
//!
//! This module defines the interface through which heaps and external
//! algorithms read and write one-indexed containers.

use super::element::Element;
use crate::error::{OrdoError, Result};

/// One-indexed, bounds-checked sequence
///
/// Valid positions are `1..=len()`. Position `0` and anything past the end
/// are rejected; an implementation must never translate them into a storage
/// offset.
pub trait OneIndexed {
    /// The element type stored in this sequence
    type Element: Element;

    /// Number of positions
    fn len(&self) -> usize;

    /// Whether the sequence has no positions
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the element at `index`
    ///
    /// Returns `None` if the index is out of bounds.
    fn get(&self, index: usize) -> Option<Self::Element>;

    /// Get the element at `index`, reporting the offending index on failure
    fn at(&self, index: usize) -> Result<Self::Element> {
        self.get(index).ok_or(OrdoError::IndexOutOfBounds {
            index,
            length: self.len(),
        })
    }

    /// Overwrite the element at `index`
    fn set(&mut self, index: usize, value: Self::Element) -> Result<()>;

    /// Exchange the elements at `a` and `b`
    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let first = self.at(a)?;
        let second = self.at(b)?;
        self.set(a, second)?;
        self.set(b, first)
    }
}
