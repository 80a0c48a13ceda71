//! Error types for ordo operations

use thiserror::Error;

/// Errors that can occur while operating on ordo structures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrdoError {
    /// One-indexed position outside `1..=length`
    #[error("index out of bounds ({index}); valid range is 1..={length}")]
    IndexOutOfBounds { index: usize, length: usize },
    /// Coordinate outside `[1, rows] x [1, columns]`
    #[error("coordinate out of bounds ({row}, {column}); shape is {rows}x{columns}")]
    CoordinateOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    /// Backing storage could not be reserved
    #[error("failed to allocate storage for {requested} elements")]
    Allocation { requested: usize },
    /// `rows * columns` does not fit in `usize`
    #[error("matrix shape {rows}x{columns} overflows the addressable size")]
    ShapeOverflow { rows: usize, columns: usize },
    /// A literal sequence does not match the allocated size
    #[error("expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// A sampling range with `min > max`
    #[error("invalid range: minimum exceeds maximum")]
    InvalidRange,
    /// A structure that requires at least one cell was given an empty shape
    #[error("invalid shape {rows}x{columns}")]
    InvalidShape { rows: usize, columns: usize },
    /// Extraction from an empty heap
    #[error("heap underflow")]
    HeapUnderflow,
    /// Growth of a heap beyond its backing array
    #[error("heap overflow: capacity is {capacity}")]
    HeapOverflow { capacity: usize },
    /// `increase_key` was given a key smaller than the current one
    #[error("new key is smaller than current key at index {index}")]
    KeyTooSmall { index: usize },
    /// `decrease_key` was given a key that is not strictly smaller
    #[error("new key is not smaller than current key at ({row}, {column})")]
    KeyNotSmaller { row: usize, column: usize },
    /// The infinity sentinel cannot be stored as a real key
    #[error("sentinel value cannot be used as a key")]
    SentinelKey,
    /// A key that does not compare with itself, such as a float NaN
    #[error("key is unordered and cannot be placed")]
    UnorderedKey,
    /// Insertion into a tableau whose last cell is occupied
    #[error("young tableau is full")]
    TableauFull,
    /// Extraction from a tableau with no occupied cells
    #[error("young tableau is empty")]
    TableauEmpty,
}

/// Coarse classification of [`OrdoError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid index or coordinate
    Index,
    /// Storage could not be provided
    Allocation,
    /// Programming-contract violation (bad key update, malformed input)
    Contract,
    /// Structure is too empty or too full for the operation
    Capacity,
}

impl OrdoError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            OrdoError::IndexOutOfBounds { .. } | OrdoError::CoordinateOutOfBounds { .. } => {
                ErrorCategory::Index
            }
            OrdoError::Allocation { .. } | OrdoError::ShapeOverflow { .. } => {
                ErrorCategory::Allocation
            }
            OrdoError::LengthMismatch { .. }
            | OrdoError::InvalidRange
            | OrdoError::InvalidShape { .. }
            | OrdoError::KeyTooSmall { .. }
            | OrdoError::KeyNotSmaller { .. }
            | OrdoError::SentinelKey
            | OrdoError::UnorderedKey => ErrorCategory::Contract,
            OrdoError::HeapUnderflow
            | OrdoError::HeapOverflow { .. }
            | OrdoError::TableauFull
            | OrdoError::TableauEmpty => ErrorCategory::Capacity,
        }
    }
}

/// Result type for ordo operations
pub type Result<T> = core::result::Result<T, OrdoError>;
