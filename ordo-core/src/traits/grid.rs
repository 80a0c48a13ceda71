//! Core matrix abstraction traits
//!
//! This module defines the one-indexed, row-major grid interface that all
//! matrix-backed structures rely on.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::Element;
use crate::error::{OrdoError, Result};
#[cfg(feature = "alloc")]
use crate::validation::validate_index;

/// One-indexed, bounds-checked two-dimensional grid
///
/// Coordinates are `(row, column)` with `1 <= row <= rows` and
/// `1 <= column <= columns`.
pub trait Grid {
    /// The element type stored in this grid
    type Element: Element;

    /// Get grid dimensions as (rows, columns)
    fn dimensions(&self) -> (usize, usize);

    /// Get the element at the specified coordinate
    ///
    /// Returns `None` if the coordinate is out of bounds.
    fn get(&self, row: usize, column: usize) -> Option<Self::Element>;

    /// Get the element at the specified coordinate, reporting the offending
    /// coordinate on failure
    fn at(&self, row: usize, column: usize) -> Result<Self::Element> {
        let (rows, columns) = self.dimensions();
        self.get(row, column).ok_or(OrdoError::CoordinateOutOfBounds {
            row,
            column,
            rows,
            columns,
        })
    }

    /// Overwrite the element at the specified coordinate
    fn set(&mut self, row: usize, column: usize, value: Self::Element) -> Result<()>;

    /// Exchange two cells
    fn swap(&mut self, a: (usize, usize), b: (usize, usize)) -> Result<()> {
        let first = self.at(a.0, a.1)?;
        let second = self.at(b.0, b.1)?;
        self.set(a.0, a.1, second)?;
        self.set(b.0, b.1, first)
    }
}

/// Extension trait for row/column operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait GridOperations: Grid {
    /// Get all elements in a row, in column order
    ///
    /// Fails with `IndexOutOfBounds` unless `1 <= row <= rows`, even when
    /// the grid has no columns.
    fn row(&self, row: usize) -> Result<Vec<Self::Element>> {
        let (rows, columns) = self.dimensions();
        validate_index(row, rows)?;
        (1..=columns).map(|column| self.at(row, column)).collect()
    }

    /// Get all elements in a column, in row order
    ///
    /// Fails with `IndexOutOfBounds` unless `1 <= column <= columns`.
    fn column(&self, column: usize) -> Result<Vec<Self::Element>> {
        let (rows, columns) = self.dimensions();
        validate_index(column, columns)?;
        (1..=rows).map(|row| self.at(row, column)).collect()
    }
}

#[cfg(feature = "alloc")]
impl<G: Grid + ?Sized> GridOperations for G {}
