//! Small value types returned by lookups and range queries

use core::fmt;

/// Result of a lookup that may find nothing without signaling an error
///
/// Renders as `nil` when empty and as the bare value otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaybeValue<T> {
    /// No value was found
    #[default]
    Nil,
    /// A value was found
    Value(T),
}

impl<T> MaybeValue<T> {
    /// Wrap a found value
    pub const fn some(value: T) -> Self {
        MaybeValue::Value(value)
    }

    /// The empty result
    pub const fn nil() -> Self {
        MaybeValue::Nil
    }

    /// Whether no value was found
    pub const fn is_nil(&self) -> bool {
        matches!(self, MaybeValue::Nil)
    }

    /// Convert into an `Option`
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for MaybeValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => MaybeValue::Value(value),
            None => MaybeValue::Nil,
        }
    }
}

impl<T> From<MaybeValue<T>> for Option<T> {
    fn from(value: MaybeValue<T>) -> Self {
        match value {
            MaybeValue::Value(value) => Some(value),
            MaybeValue::Nil => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for MaybeValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaybeValue::Nil => write!(f, "nil"),
            MaybeValue::Value(value) => write!(f, "{value}"),
        }
    }
}

/// Contiguous one-indexed range `[start, end]` and the sum of its elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subarray<T> {
    /// First position, inclusive
    pub start: usize,
    /// Last position, inclusive
    pub end: usize,
    /// Aggregate of the covered elements
    pub sum: T,
}

impl<T> Subarray<T> {
    /// Create a new subarray descriptor
    pub const fn new(start: usize, end: usize, sum: T) -> Self {
        Self { start, end, sum }
    }

    /// Number of positions covered
    pub const fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Whether the range covers no positions
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a position falls within this range
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}
