//! Young tableau over a bounded matrix
//!
//! Every row is non-decreasing left to right and every column is
//! non-decreasing top to bottom, with the `INFINITY` sentinel standing in for
//! empty cells. Because the sentinel is the largest value, empty cells always
//! form a staircase in the bottom-right corner: if a cell is empty, so is
//! every cell to its right and every cell below it.

use std::cmp::Ordering;
use std::fmt;

use ordo_core::{validate_shape, Element, Grid, MaybeValue, OrdoError, Result};

use crate::matrix::BoundedMatrix;

/// Row- and column-sorted matrix used as a min-priority structure
#[derive(Debug, Clone, PartialEq)]
pub struct YoungTableau<T> {
    data: BoundedMatrix<T>,
    records: usize,
}

impl<T: Element> YoungTableau<T> {
    /// Create an empty `rows x columns` tableau
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(OrdoError::InvalidShape { rows, columns });
        }

        Ok(Self {
            data: BoundedMatrix::filled(rows, columns, T::INFINITY)?,
            records: 0,
        })
    }

    /// Create a tableau holding `elements`, smallest first in row-major order
    ///
    /// Remaining cells hold the sentinel.
    pub fn from_elements(rows: usize, columns: usize, elements: &[T]) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(OrdoError::InvalidShape { rows, columns });
        }
        let cells = validate_shape(rows, columns)?;
        if elements.len() > cells {
            return Err(OrdoError::LengthMismatch {
                expected: cells,
                actual: elements.len(),
            });
        }
        if elements.iter().any(|e| e.is_infinity()) {
            return Err(OrdoError::SentinelKey);
        }
        if elements.iter().any(|e| e.is_unordered()) {
            return Err(OrdoError::UnorderedKey);
        }

        let mut sorted = elements.to_vec();
        // Every element compares with itself, so this is a total order
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        sorted.resize(cells, T::INFINITY);

        tracing::trace!(rows, columns, records = elements.len(), "building young tableau");
        Ok(Self {
            data: BoundedMatrix::from_row_major(rows, columns, &sorted)?,
            records: elements.len(),
        })
    }

    /// Get tableau dimensions as (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        self.data.dimensions()
    }

    /// Number of occupied cells
    pub fn records(&self) -> usize {
        self.records
    }

    /// The underlying matrix
    pub fn matrix(&self) -> &BoundedMatrix<T> {
        &self.data
    }

    /// Whether the top-left cell is empty
    pub fn is_empty(&self) -> bool {
        self.cell(1, 1).is_infinity()
    }

    /// Whether the bottom-right cell is occupied
    pub fn is_full(&self) -> bool {
        let (rows, columns) = self.data.dimensions();
        self.cell(rows, columns) < T::INFINITY
    }

    /// Smallest key, or nil on an empty tableau
    pub fn minimum(&self) -> MaybeValue<T> {
        if self.is_empty() {
            MaybeValue::nil()
        } else {
            MaybeValue::some(self.cell(1, 1))
        }
    }

    /// Remove and return the smallest key
    pub fn extract_min(&mut self) -> Result<T> {
        if self.is_empty() {
            tracing::debug!("extract_min on an empty tableau");
            return Err(OrdoError::TableauEmpty);
        }

        let min = self.data.at(1, 1)?;
        self.data.set(1, 1, T::INFINITY)?;
        self.youngify(1, 1)?;
        self.records -= 1;
        Ok(min)
    }

    /// Push the key at `(row, column)` down and right until order holds
    ///
    /// The cell below is considered first; the cell to the right replaces it
    /// only when strictly smaller, so ties move down.
    pub fn youngify(&mut self, row: usize, column: usize) -> Result<()> {
        let value = self.data.at(row, column)?;

        let mut position = (row, column);
        loop {
            let target = self.smaller_successor(position.0, position.1, value)?;
            if target == position {
                break;
            }
            self.data.swap(position, target)?;
            position = target;
        }
        Ok(())
    }

    /// The smaller of the below and right neighbors undercutting `value`,
    /// or the cell itself when neither does
    fn smaller_successor(&self, row: usize, column: usize, value: T) -> Result<(usize, usize)> {
        let (rows, columns) = self.data.dimensions();
        let mut smallest = (row, column);
        let mut smallest_value = value;

        if row < rows {
            let below = self.data.at(row + 1, column)?;
            if below < smallest_value {
                smallest = (row + 1, column);
                smallest_value = below;
            }
        }
        if column < columns {
            let right = self.data.at(row, column + 1)?;
            if right < smallest_value {
                smallest = (row, column + 1);
            }
        }
        Ok(smallest)
    }

    /// Add `key` to the tableau
    ///
    /// Fails with `TableauFull` when the bottom-right cell is occupied.
    pub fn insert(&mut self, key: T) -> Result<()> {
        if self.is_full() {
            tracing::debug!("insert into a full tableau");
            return Err(OrdoError::TableauFull);
        }

        let (rows, columns) = self.data.dimensions();
        self.decrease_key(rows, columns, key)
    }

    /// Lower the key at `(row, column)` to `key` and move it up and left
    ///
    /// Fails with `KeyNotSmaller` unless `key` is strictly below the current
    /// key. Lowering an empty cell occupies it.
    pub fn decrease_key(&mut self, row: usize, column: usize, key: T) -> Result<()> {
        let current = self.data.at(row, column)?;
        if key.is_infinity() {
            return Err(OrdoError::SentinelKey);
        }
        if key.is_unordered() {
            return Err(OrdoError::UnorderedKey);
        }
        if !(key < current) {
            tracing::debug!(row, column, "decrease_key given a key that is not smaller");
            return Err(OrdoError::KeyNotSmaller { row, column });
        }

        self.data.set(row, column, key)?;
        if current.is_infinity() {
            self.records += 1;
        }

        self.youngify_rev(row, column)
    }

    /// Push the key at `(row, column)` up and left until order holds
    ///
    /// Each step swaps with the larger of the up and left neighbors that
    /// exceed the key.
    pub fn youngify_rev(&mut self, row: usize, column: usize) -> Result<()> {
        let value = self.data.at(row, column)?;

        let mut position = (row, column);
        loop {
            let target = self.larger_predecessor(position.0, position.1, value)?;
            if target == position {
                break;
            }
            self.data.swap(position, target)?;
            position = target;
        }
        Ok(())
    }

    /// The larger of the up and left neighbors exceeding `value`, or the
    /// cell itself when neither does
    ///
    /// The cell above is considered first, so ties move up.
    fn larger_predecessor(&self, row: usize, column: usize, value: T) -> Result<(usize, usize)> {
        let mut largest = (row, column);
        let mut largest_value = value;

        if row > 1 {
            let above = self.data.at(row - 1, column)?;
            if above > largest_value {
                largest = (row - 1, column);
                largest_value = above;
            }
        }
        if column > 1 {
            let left = self.data.at(row, column - 1)?;
            if left > largest_value {
                largest = (row, column - 1);
            }
        }
        Ok(largest)
    }

    /// Whether `key` is stored in the tableau
    pub fn search(&self, key: T) -> bool {
        self.locate(key).is_some()
    }

    /// Coordinates of a cell holding `key`
    ///
    /// Walks from the top-right corner, moving left past larger keys and down
    /// past smaller ones, so at most `rows + columns` cells are probed.
    pub fn locate(&self, key: T) -> Option<(usize, usize)> {
        self.locate_with_probes(key).0
    }

    pub(crate) fn locate_with_probes(&self, key: T) -> (Option<(usize, usize)>, usize) {
        if key.is_infinity() {
            return (None, 0);
        }

        let (rows, columns) = self.data.dimensions();
        let (mut row, mut column) = (1, columns);
        let mut probes = 0;

        while let Some(element) = self.data.get(row, column) {
            probes += 1;
            if element == key {
                return (Some((row, column)), probes);
            } else if element > key {
                if column == 1 {
                    break;
                }
                column -= 1;
            } else if row < rows {
                row += 1;
            } else {
                break;
            }
        }
        (None, probes)
    }

    /// Whether every row and column is non-decreasing
    pub fn is_young(&self) -> bool {
        let (rows, columns) = self.data.dimensions();
        (1..=rows).all(|row| {
            (1..=columns).all(|column| {
                let value = self.cell(row, column);
                let right_ok = column == columns || value <= self.cell(row, column + 1);
                let below_ok = row == rows || value <= self.cell(row + 1, column);
                right_ok && below_ok
            })
        })
    }

    /// Read a cell the shape guarantees to exist
    fn cell(&self, row: usize, column: usize) -> T {
        self.data.get(row, column).unwrap_or(T::INFINITY)
    }
}

impl<T: Element> fmt::Display for YoungTableau<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn drain<T: Element>(tableau: &mut YoungTableau<T>) -> Vec<T> {
        let mut out = Vec::new();
        while !tableau.is_empty() {
            out.push(tableau.extract_min().unwrap());
        }
        out
    }

    #[test]
    fn test_new_is_empty() {
        let tableau = YoungTableau::<i32>::new(3, 4).unwrap();

        assert!(tableau.is_empty());
        assert!(!tableau.is_full());
        assert_eq!(tableau.records(), 0);
        assert!(tableau.minimum().is_nil());
        assert!(tableau.matrix().as_slice().iter().all(|&v| v == i32::MAX));
    }

    #[test]
    fn test_rejects_empty_shape() {
        assert_eq!(
            YoungTableau::<i32>::new(0, 3),
            Err(OrdoError::InvalidShape { rows: 0, columns: 3 })
        );
    }

    #[test]
    fn test_from_elements_fills_row_major() {
        let tableau = YoungTableau::from_elements(2, 3, &[9, 2, 7, 4, 1, 6]).unwrap();

        assert_eq!(tableau.matrix().as_slice(), &[1, 2, 4, 6, 7, 9]);
        assert!(tableau.is_full());
        assert_eq!(tableau.records(), 6);
        assert!(tableau.is_young());
    }

    #[test]
    fn test_from_elements_pads_and_rejects_overflow() {
        let tableau = YoungTableau::from_elements(2, 2, &[5, 3]).unwrap();
        assert_eq!(tableau.matrix().as_slice(), &[3, 5, i32::MAX, i32::MAX]);
        assert!(!tableau.is_full());

        assert_eq!(
            YoungTableau::from_elements(1, 2, &[1, 2, 3]),
            Err(OrdoError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            YoungTableau::from_elements(2, 2, &[1, i32::MAX]),
            Err(OrdoError::SentinelKey)
        );
    }

    #[test]
    fn test_drain_is_ascending() {
        let mut tableau = YoungTableau::from_elements(2, 3, &[9, 2, 7, 4, 1, 6]).unwrap();

        assert_eq!(drain(&mut tableau), vec![1, 2, 4, 6, 7, 9]);
        assert_eq!(tableau.records(), 0);
        assert_eq!(tableau.extract_min(), Err(OrdoError::TableauEmpty));
    }

    #[test]
    fn test_youngify_prefers_smaller_neighbor() {
        // Right neighbor (2) is smaller than the one below (3)
        let mut tableau = YoungTableau::from_elements(2, 2, &[1, 2, 3]).unwrap();
        assert_eq!(tableau.extract_min(), Ok(1));
        assert_eq!(tableau.matrix().as_slice(), &[2, i32::MAX, 3, i32::MAX]);

        // Below (4) is smaller than right (5)
        let mut tableau = YoungTableau::<i32>::new(2, 2).unwrap();
        tableau.data = BoundedMatrix::from_row_major(2, 2, &[1, 5, 4, 6]).unwrap();
        tableau.records = 4;
        assert_eq!(tableau.extract_min(), Ok(1));
        assert_eq!(tableau.matrix().as_slice(), &[4, 5, 6, i32::MAX]);
        assert!(tableau.is_young());
    }

    #[test]
    fn test_youngify_ties_move_down() {
        let mut tableau = YoungTableau::<i32>::new(2, 2).unwrap();
        tableau.data = BoundedMatrix::from_row_major(2, 2, &[9, 3, 3, 10]).unwrap();

        tableau.youngify(1, 1).unwrap();

        assert_eq!(tableau.matrix().as_slice(), &[3, 3, 9, 10]);
    }

    #[test]
    fn test_insert_bubbles_up() {
        let mut tableau = YoungTableau::<i32>::new(2, 2).unwrap();

        for key in [8, 3, 5, 1] {
            tableau.insert(key).unwrap();
            assert!(tableau.is_young());
        }

        assert!(tableau.is_full());
        assert_eq!(tableau.records(), 4);
        assert_eq!(tableau.minimum(), MaybeValue::some(1));
        assert_eq!(tableau.insert(0), Err(OrdoError::TableauFull));
        assert_eq!(drain(&mut tableau), vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_decrease_key() {
        let mut tableau = YoungTableau::from_elements(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();

        tableau.decrease_key(3, 3, 0).unwrap();

        assert!(tableau.is_young());
        assert_eq!(tableau.minimum(), MaybeValue::some(0));
        assert_eq!(tableau.records(), 9);
    }

    #[test]
    fn test_decrease_key_picks_larger_predecessor() {
        // Above (6) is larger than left (3): 6 must come down
        let mut tableau = YoungTableau::<i32>::new(2, 2).unwrap();
        tableau.data = BoundedMatrix::from_row_major(2, 2, &[1, 6, 3, 8]).unwrap();

        tableau.decrease_key(2, 2, 2).unwrap();

        assert_eq!(tableau.matrix().as_slice(), &[1, 2, 3, 6]);
        assert!(tableau.is_young());
    }

    #[test]
    fn test_decrease_key_rejects_non_decreasing_key() {
        let mut tableau = YoungTableau::from_elements(2, 2, &[1, 2, 3, 4]).unwrap();

        assert_eq!(
            tableau.decrease_key(2, 1, 3),
            Err(OrdoError::KeyNotSmaller { row: 2, column: 1 })
        );
        assert_eq!(
            tableau.decrease_key(2, 1, 5),
            Err(OrdoError::KeyNotSmaller { row: 2, column: 1 })
        );
        assert!(tableau.decrease_key(3, 1, 0).is_err());
        assert_eq!(tableau.matrix().as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_youngify_rev_matches_decrease_key() {
        let mut decreased = YoungTableau::from_elements(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        let mut pushed = decreased.clone();

        decreased.decrease_key(3, 2, 0).unwrap();
        pushed.data.set(3, 2, 0).unwrap();
        pushed.youngify_rev(3, 2).unwrap();

        assert_eq!(decreased.matrix(), pushed.matrix());
        assert!(decreased.is_young());
    }

    #[test]
    fn test_tall_tableau_does_not_recurse_per_row() {
        let rows = 200_000;
        let elements: Vec<i64> = (0..rows as i64).collect();
        let mut tableau = YoungTableau::from_elements(rows, 1, &elements).unwrap();

        // The sentinel travels the whole column
        assert_eq!(tableau.extract_min(), Ok(0));
        assert_eq!(tableau.minimum(), MaybeValue::some(1));
        assert_eq!(tableau.matrix().at(rows, 1), Ok(i64::MAX));

        // And a new minimum climbs all the way back
        tableau.decrease_key(rows, 1, -1).unwrap();
        assert_eq!(tableau.minimum(), MaybeValue::some(-1));
        assert_eq!(tableau.records(), rows);

        let mut wide = YoungTableau::from_elements(1, rows, &elements).unwrap();
        wide.data.set(1, rows, -5).unwrap();
        wide.youngify_rev(1, rows).unwrap();
        assert_eq!(wide.minimum(), MaybeValue::some(-5));
        assert_eq!(wide.matrix().at(1, rows), Ok(rows as i64 - 2));
    }

    #[test]
    fn test_rejects_unordered_float_keys() {
        let mut rng = StdRng::seed_from_u64(8);
        let elements: Vec<f64> = (0..34)
            .map(|_| {
                if rng.gen_bool(0.3) {
                    f64::NAN
                } else {
                    rng.gen_range(-10.0..10.0)
                }
            })
            .collect();
        assert!(elements.iter().any(|e| e.is_nan()));

        assert_eq!(
            YoungTableau::from_elements(20, 20, &elements),
            Err(OrdoError::UnorderedKey)
        );
        assert_eq!(
            YoungTableau::from_elements(2, 2, &[1.0, f64::NAN]),
            Err(OrdoError::UnorderedKey)
        );

        let mut tableau = YoungTableau::from_elements(2, 2, &[1.5, -2.0, 0.25]).unwrap();
        assert_eq!(tableau.insert(f64::NAN), Err(OrdoError::UnorderedKey));
        assert_eq!(
            tableau.decrease_key(1, 2, f64::NAN),
            Err(OrdoError::UnorderedKey)
        );
        assert_eq!(tableau.records(), 3);
        assert!(tableau.is_young());
        assert_eq!(drain(&mut tableau), vec![-2.0, 0.25, 1.5]);
    }

    #[test]
    fn test_search_full_tableau() {
        let values = [12, 3, 7, 1, 9, 15, 4, 10, 2, 8, 6, 14];
        let tableau = YoungTableau::from_elements(3, 4, &values).unwrap();

        for value in values {
            let (found, probes) = tableau.locate_with_probes(value);
            let (row, column) = found.unwrap();
            assert_eq!(tableau.matrix().at(row, column), Ok(value));
            assert!(probes <= 3 + 4);
        }

        for missing in [0, 5, 11, 13, 16] {
            let (found, probes) = tableau.locate_with_probes(missing);
            assert_eq!(found, None);
            assert!(probes <= 3 + 4);
            assert!(!tableau.search(missing));
        }
    }

    #[test]
    fn test_search_ignores_sentinel() {
        let tableau = YoungTableau::from_elements(2, 2, &[1]).unwrap();

        assert!(tableau.search(1));
        assert!(!tableau.search(i32::MAX));
    }

    #[test]
    fn test_display() {
        let tableau = YoungTableau::from_elements(2, 2, &[2, 1, 3]).unwrap();
        assert_eq!(tableau.to_string(), "1\t2\t\n3\tinf\t\n");
    }

    #[test]
    fn test_fuzz_operations_preserve_order() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

        for _ in 0..50 {
            let rows = rng.gen_range(1..6);
            let columns = rng.gen_range(1..6);
            let initial: Vec<i64> = (0..rng.gen_range(0..=rows * columns))
                .map(|_| rng.gen_range(-100..100))
                .collect();
            let mut tableau = YoungTableau::from_elements(rows, columns, &initial).unwrap();
            let mut model = initial.clone();

            for _ in 0..100 {
                match rng.gen_range(0..3) {
                    0 if !tableau.is_full() => {
                        let key = rng.gen_range(-100..100);
                        tableau.insert(key).unwrap();
                        model.push(key);
                    }
                    1 if !model.is_empty() => {
                        let row = rng.gen_range(1..=rows);
                        let column = rng.gen_range(1..=columns);
                        let current = tableau.matrix().at(row, column).unwrap();
                        if current != i64::MAX && current > -200 {
                            let lowered = current - rng.gen_range(1..50);
                            tableau.decrease_key(row, column, lowered).unwrap();
                            let slot = model.iter().position(|&k| k == current).unwrap();
                            model[slot] = lowered;
                        }
                    }
                    _ => {
                        if let Some(&min) = model.iter().min() {
                            assert_eq!(tableau.extract_min(), Ok(min));
                            let slot = model.iter().position(|&k| k == min).unwrap();
                            model.swap_remove(slot);
                        } else {
                            assert_eq!(tableau.extract_min(), Err(OrdoError::TableauEmpty));
                        }
                    }
                }

                assert!(tableau.is_young());
                assert_eq!(tableau.records(), model.len());
                for &key in &model {
                    assert!(tableau.search(key));
                }
            }
        }
    }
}
