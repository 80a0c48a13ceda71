//! Max priority queue layered on a binary heap
//!
//! The queue owns a heap but touches it only through [`HeapAccess`], so any
//! heap exposing that capability can back it.

use ordo_core::{parent, Element, HeapAccess, MaybeValue, OrdoError, Result};

use crate::array::BoundedArray;
use crate::heap::BinaryMaxHeap;

/// Max priority queue backed by the default [`BinaryMaxHeap`]
pub type PriorityQueue<T> = MaxPriorityQueue<BinaryMaxHeap<T>>;

/// Max priority queue over a heap capability
#[derive(Debug, Clone, PartialEq)]
pub struct MaxPriorityQueue<H> {
    heap: H,
}

impl<T: Element> MaxPriorityQueue<BinaryMaxHeap<T>> {
    /// Create an empty queue able to hold `capacity` keys
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self::new(BinaryMaxHeap::new(capacity)?))
    }

    /// Create a full queue holding every element of `array`
    pub fn from_array(array: BoundedArray<T>) -> Self {
        Self::new(BinaryMaxHeap::from_array(array))
    }

    /// Create a full queue holding a copy of `values`
    pub fn from_slice(values: &[T]) -> Result<Self> {
        Ok(Self::new(BinaryMaxHeap::from_slice(values)?))
    }
}

impl<H: HeapAccess> MaxPriorityQueue<H> {
    /// Wrap an existing heap
    pub fn new(heap: H) -> Self {
        Self { heap }
    }

    /// Number of queued keys
    pub fn len(&self) -> usize {
        self.heap.heap_size()
    }

    /// Whether the queue holds no keys
    pub fn is_empty(&self) -> bool {
        self.heap.heap_size() == 0
    }

    /// Maximum number of keys
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// The underlying heap
    pub fn heap(&self) -> &H {
        &self.heap
    }

    /// Consume the queue, returning the underlying heap
    pub fn into_inner(self) -> H {
        self.heap
    }

    /// Largest key, without removing it
    ///
    /// Fails with `HeapUnderflow` on an empty queue.
    pub fn maximum(&self) -> Result<H::Key> {
        if self.is_empty() {
            return Err(OrdoError::HeapUnderflow);
        }
        self.heap.key(1)
    }

    /// Largest key, or nil on an empty queue
    pub fn peek(&self) -> MaybeValue<H::Key> {
        self.maximum().ok().into()
    }

    /// Remove and return the largest key
    pub fn extract_max(&mut self) -> Result<H::Key> {
        let size = self.heap.heap_size();
        if size < 1 {
            tracing::debug!("extract_max on an empty queue");
            return Err(OrdoError::HeapUnderflow);
        }

        let max = self.heap.key(1)?;
        let last = self.heap.key(size)?;
        self.heap.set_key(1, last)?;
        self.heap.set_heap_size(size - 1)?;
        self.heap.max_heapify(1)?;
        Ok(max)
    }

    /// Raise the key at `index` to `key` and sift it up
    ///
    /// Fails with `KeyTooSmall` if `key` is below the current key; this
    /// operation never lowers a key.
    pub fn increase_key(&mut self, index: usize, key: H::Key) -> Result<()> {
        let size = self.heap.heap_size();
        if index == 0 || index > size {
            return Err(OrdoError::IndexOutOfBounds {
                index,
                length: size,
            });
        }
        if key < self.heap.key(index)? {
            tracing::debug!(index, "increase_key given a smaller key");
            return Err(OrdoError::KeyTooSmall { index });
        }

        self.heap.set_key(index, key)?;
        let mut i = index;
        while i > 1 && self.heap.key(parent(i))? < self.heap.key(i)? {
            self.heap.swap_keys(i, parent(i))?;
            i = parent(i);
        }
        Ok(())
    }

    /// Add `key` to the queue
    ///
    /// Fails with `HeapOverflow` when the queue is at capacity.
    pub fn insert(&mut self, key: H::Key) -> Result<()> {
        let size = self.heap.heap_size() + 1;
        self.heap.set_heap_size(size)?;
        self.heap.set_key(size, <H::Key as Element>::NEG_INFINITY)?;
        self.increase_key(size, key)
    }
}
