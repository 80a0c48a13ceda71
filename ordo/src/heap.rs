//! Binary max-heap over a bounded array
//!
//! The heap covers positions `1..=heap_size` of its backing array; positions
//! past `heap_size` keep whatever values they hold (after [`heapsort`] they
//! hold the sorted tail).
//!
//! [`heapsort`]: BinaryMaxHeap::heapsort

use std::fmt;

use ordo_core::{left, right, Element, HeapAccess, OneIndexed, OrdoError, Result};

use crate::array::BoundedArray;
use crate::render::{render_tree, RenderConfig};

/// Binary max-heap backed by a [`BoundedArray`]
///
/// For every position `i` in `1..=heap_size`, the key at `i` is at least as
/// large as the keys of its children that also lie in `1..=heap_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryMaxHeap<T> {
    data: BoundedArray<T>,
    heap_size: usize,
}

impl<T: Element> BinaryMaxHeap<T> {
    /// Create an empty heap able to hold `capacity` keys
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            data: BoundedArray::new(capacity)?,
            heap_size: 0,
        })
    }

    /// Build a heap over every element of `array`
    pub fn from_array(array: BoundedArray<T>) -> Self {
        let heap_size = array.len();
        let mut heap = Self {
            data: array,
            heap_size,
        };
        heap.build_max_heap();
        heap
    }

    /// Build a heap over a copy of `values`
    pub fn from_slice(values: &[T]) -> Result<Self> {
        Ok(Self::from_array(BoundedArray::from_slice(values)?))
    }

    /// Number of keys covered by the heap property
    pub fn heap_size(&self) -> usize {
        self.heap_size
    }

    /// Number of positions in the backing array
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The backing array, including positions past `heap_size`
    pub fn data(&self) -> &BoundedArray<T> {
        &self.data
    }

    /// Consume the heap, returning its backing array
    pub fn into_array(self) -> BoundedArray<T> {
        self.data
    }

    /// Position of the larger of `index` and its in-heap children
    fn largest_of_family(&self, index: usize) -> usize {
        let keys = self.data.as_slice();
        let (l, r) = (left(index), right(index));

        let mut largest = index;
        if l <= self.heap_size && keys[l - 1] > keys[largest - 1] {
            largest = l;
        }
        if r <= self.heap_size && keys[r - 1] > keys[largest - 1] {
            largest = r;
        }
        largest
    }

    fn check_position(&self, index: usize) -> Result<()> {
        if index == 0 || index > self.data.len() {
            return Err(OrdoError::IndexOutOfBounds {
                index,
                length: self.data.len(),
            });
        }
        Ok(())
    }

    /// Sink the key at `index` until neither child exceeds it
    ///
    /// Iterative; see [`max_heapify_recursive`](Self::max_heapify_recursive)
    /// for the recursive formulation with the same effect.
    pub fn max_heapify(&mut self, index: usize) -> Result<()> {
        self.check_position(index)?;
        self.sink(index);
        Ok(())
    }

    /// Recursive sink with the same observable effect as [`max_heapify`](Self::max_heapify)
    pub fn max_heapify_recursive(&mut self, index: usize) -> Result<()> {
        self.check_position(index)?;

        if index > self.heap_size {
            return Ok(());
        }
        let largest = self.largest_of_family(index);
        if largest != index {
            self.data.swap(index, largest)?;
            self.max_heapify_recursive(largest)?;
        }
        Ok(())
    }

    /// Establish the heap property over `1..=heap_size`, bottom-up
    pub fn build_max_heap(&mut self) {
        tracing::trace!(heap_size = self.heap_size, "building max-heap");
        for i in (1..=self.heap_size / 2).rev() {
            self.sink(i);
        }
    }

    /// Sort the backing array ascending in place
    ///
    /// Destroys the heap: afterwards `heap_size` is `1` (or `0` if the heap
    /// was empty) and the first original `heap_size` positions are sorted.
    pub fn heapsort(&mut self) {
        tracing::trace!(heap_size = self.heap_size, "heapsort");
        for i in (2..=self.heap_size).rev() {
            self.data.as_mut_slice().swap(0, i - 1);
            self.heap_size -= 1;
            self.sink(1);
        }
    }

    /// Heapsort and return the sorted backing array
    pub fn into_sorted_array(mut self) -> BoundedArray<T> {
        self.heapsort();
        self.data
    }

    /// `floor(log2(heap_size))`, or `0` for an empty heap
    pub fn height(&self) -> usize {
        if self.heap_size == 0 {
            0
        } else {
            self.heap_size.ilog2() as usize
        }
    }

    /// Number of left-child descents from the root that stay inside the heap
    pub fn depth(&self) -> usize {
        let mut i = 1;
        let mut depth = 0;
        while i <= self.heap_size {
            i = left(i);
            depth += 1;
        }
        depth
    }

    /// Whether every node in `1..=heap_size` dominates its in-heap children
    pub fn is_max_heap(&self) -> bool {
        let keys = self.data.as_slice();
        (2..=self.heap_size).all(|i| keys[i / 2 - 1] >= keys[i - 1])
    }

    /// Render the flat array followed by an ASCII tree of the heap
    pub fn render(&self, config: &RenderConfig) -> String {
        let labels: Vec<String> = self.data.as_slice()[..self.heap_size]
            .iter()
            .map(|key| key.to_string())
            .collect();

        let mut out = format!("{}\n", self.data);
        for line in render_tree(&labels, self.depth(), config) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Sink without position checks; `index` must be in `1..=capacity`
    fn sink(&mut self, index: usize) {
        let mut i = index;
        while i < self.heap_size {
            let largest = self.largest_of_family(i);
            if largest == i {
                break;
            }
            self.data.as_mut_slice().swap(i - 1, largest - 1);
            i = largest;
        }
    }
}

impl<T: Element> HeapAccess for BinaryMaxHeap<T> {
    type Key = T;

    fn heap_size(&self) -> usize {
        self.heap_size
    }

    fn capacity(&self) -> usize {
        self.data.len()
    }

    fn set_heap_size(&mut self, size: usize) -> Result<()> {
        if size > self.data.len() {
            tracing::debug!(size, capacity = self.data.len(), "heap size exceeds capacity");
            return Err(OrdoError::HeapOverflow {
                capacity: self.data.len(),
            });
        }
        self.heap_size = size;
        Ok(())
    }

    fn key(&self, index: usize) -> Result<T> {
        self.data.at(index)
    }

    fn set_key(&mut self, index: usize, key: T) -> Result<()> {
        self.data.set(index, key)
    }

    fn swap_keys(&mut self, a: usize, b: usize) -> Result<()> {
        self.data.swap(a, b)
    }

    fn max_heapify(&mut self, index: usize) -> Result<()> {
        BinaryMaxHeap::max_heapify(self, index)
    }
}

impl<T: Element> From<BoundedArray<T>> for BinaryMaxHeap<T> {
    fn from(array: BoundedArray<T>) -> Self {
        Self::from_array(array)
    }
}

impl<T: Element> fmt::Display for BinaryMaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderConfig::default()))
    }
}
