//! Index, coordinate and shape validation
//!
//! Pure functions that map one-indexed positions to zero-based storage
//! offsets, rejecting anything outside the valid range.

use crate::OrdoError;

/// Validate a one-indexed position and return its zero-based offset
///
/// Valid positions are `1..=length`.
pub const fn validate_index(index: usize, length: usize) -> Result<usize, OrdoError> {
    if index == 0 || index > length {
        return Err(OrdoError::IndexOutOfBounds { index, length });
    }

    Ok(index - 1)
}

/// Validate a one-indexed coordinate and return its row-major offset
///
/// Valid coordinates are `1..=rows` by `1..=columns`.
pub const fn validate_coordinate(
    row: usize,
    column: usize,
    rows: usize,
    columns: usize,
) -> Result<usize, OrdoError> {
    if row == 0 || row > rows || column == 0 || column > columns {
        return Err(OrdoError::CoordinateOutOfBounds {
            row,
            column,
            rows,
            columns,
        });
    }

    // Cannot overflow: the shape was validated when the grid was created
    Ok((row - 1) * columns + (column - 1))
}

/// Validate a matrix shape and return its cell count
///
/// Rejects shapes whose cell count overflows `usize`.
pub const fn validate_shape(rows: usize, columns: usize) -> Result<usize, OrdoError> {
    match rows.checked_mul(columns) {
        Some(cells) => Ok(cells),
        None => Err(OrdoError::ShapeOverflow { rows, columns }),
    }
}
