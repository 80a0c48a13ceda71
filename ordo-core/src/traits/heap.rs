//! Heap capability interface
//!
//! Structures layered on a binary heap (such as a priority queue) reach the
//! heap only through [`HeapAccess`], never through its internal fields.

use super::element::Element;
use crate::error::Result;

/// Parent position of a one-indexed heap node
#[inline]
pub const fn parent(index: usize) -> usize {
    index / 2
}

/// Left child position of a one-indexed heap node
#[inline]
pub const fn left(index: usize) -> usize {
    2 * index
}

/// Right child position of a one-indexed heap node
#[inline]
pub const fn right(index: usize) -> usize {
    2 * index + 1
}

/// Capability-level access to a binary max-heap
///
/// The logical heap occupies positions `1..=heap_size()` of a backing array
/// with `capacity()` positions. Keys outside the logical heap are still
/// addressable up to `capacity()`.
pub trait HeapAccess {
    /// The key type ordered by the heap
    type Key: Element;

    /// Number of positions covered by the heap property
    fn heap_size(&self) -> usize;

    /// Number of positions in the backing array
    fn capacity(&self) -> usize;

    /// Resize the logical heap
    ///
    /// Fails with `HeapOverflow` when `size` exceeds `capacity()`.
    fn set_heap_size(&mut self, size: usize) -> Result<()>;

    /// Key at a position of the backing array
    fn key(&self, index: usize) -> Result<Self::Key>;

    /// Overwrite a key without restoring the heap property
    fn set_key(&mut self, index: usize, key: Self::Key) -> Result<()>;

    /// Exchange two keys without restoring the heap property
    fn swap_keys(&mut self, a: usize, b: usize) -> Result<()>;

    /// Sink the key at `index` until the max-heap property holds below it
    fn max_heapify(&mut self, index: usize) -> Result<()>;
}
