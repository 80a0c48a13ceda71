//! One-indexed, bounds-checked row-major matrix

use std::fmt;

use ordo_core::{validate_coordinate, validate_shape, Element, Grid, OrdoError, Result};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::random::UniformRange;
use crate::storage;

/// Fixed-shape, one-indexed matrix stored row-major
///
/// Cloning produces a fully independent deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedMatrix<T> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

impl<T: Element> BoundedMatrix<T> {
    /// Create a zero-filled `rows x columns` matrix
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::filled(rows, columns, T::ZERO)
    }

    /// Create a `rows x columns` matrix with every cell set to `value`
    pub fn filled(rows: usize, columns: usize, value: T) -> Result<Self> {
        let cells = validate_shape(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            data: storage::filled(cells, value)?,
        })
    }

    /// Create a matrix from a row-major literal
    ///
    /// The literal must supply exactly `rows * columns` values.
    pub fn from_row_major(rows: usize, columns: usize, values: &[T]) -> Result<Self> {
        let cells = validate_shape(rows, columns)?;
        if values.len() != cells {
            return Err(OrdoError::LengthMismatch {
                expected: cells,
                actual: values.len(),
            });
        }

        Ok(Self {
            rows,
            columns,
            data: storage::copied(values)?,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Zero-based row-major view of the contents
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Fill every cell with `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T: Element + SampleUniform> BoundedMatrix<T> {
    /// Fill every cell uniformly from `range`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, range: UniformRange<T>) {
        tracing::trace!(rows = self.rows, columns = self.columns, "randomizing matrix");
        for value in &mut self.data {
            *value = range.sample(rng);
        }
    }

    /// Fill every cell uniformly from `[1, 50]`
    pub fn randomize_default<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.randomize(rng, UniformRange::matrix_default());
    }
}

impl<T: Element> Grid for BoundedMatrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    fn get(&self, row: usize, column: usize) -> Option<T> {
        validate_coordinate(row, column, self.rows, self.columns)
            .ok()
            .map(|offset| self.data[offset])
    }

    fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        let offset = validate_coordinate(row, column, self.rows, self.columns)?;
        self.data[offset] = value;
        Ok(())
    }

    fn swap(&mut self, a: (usize, usize), b: (usize, usize)) -> Result<()> {
        let first = validate_coordinate(a.0, a.1, self.rows, self.columns)?;
        let second = validate_coordinate(b.0, b.1, self.rows, self.columns)?;
        self.data.swap(first, second);
        Ok(())
    }
}

impl<T: Element> fmt::Display for BoundedMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.columns.max(1)) {
            for value in row {
                if value.is_infinity() {
                    write!(f, "inf\t")?;
                } else {
                    write!(f, "{value}\t")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
