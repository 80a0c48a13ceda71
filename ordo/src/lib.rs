//! Ordo - Invariant-driven array-backed data structures
//!
//! This library provides one-indexed, bounds-checked containers and the
//! classic structures built on them.
//!
//! ## Architecture
//!
//! Ordo follows a definition/implementation separation:
//!
//! - **ordo-core**: Error taxonomy, element and access traits, heap index
//!   arithmetic and bounds validation (no allocation, no randomness)
//! - **ordo**: Concrete containers and structures
//!
//! ## Quick Start
//!
//! ```rust
//! use ordo::{BoundedArray, PriorityQueue, YoungTableau, OrdoError};
//!
//! fn example() -> Result<(), OrdoError> {
//!     let mut queue = PriorityQueue::from_array(BoundedArray::from([1, 4, 2, 8, 5]));
//!     assert_eq!(queue.extract_max()?, 8);
//!
//!     let mut tableau = YoungTableau::from_elements(2, 3, &[9, 2, 7, 4, 1, 6])?;
//!     assert_eq!(tableau.extract_min()?, 1);
//!     assert!(tableau.search(7));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Structures
//!
//! - **BoundedArray / BoundedMatrix**: one-indexed storage that reports
//!   out-of-range positions as errors
//! - **BinaryMaxHeap**: heapify, build and heapsort, with an ASCII tree
//!   renderer for diagnostics
//! - **MaxPriorityQueue**: insert, increase-key and extract-max through the
//!   `HeapAccess` capability
//! - **YoungTableau**: row- and column-sorted matrix with extract-min,
//!   decrease-key, insert and staircase search

// Re-export core abstractions
pub use ordo_core::{
    // Traits
    Element, Grid, GridOperations, HeapAccess, OneIndexed, SignedElement,
    // Heap index arithmetic
    left, parent, right,
    // Value types
    MaybeValue, Subarray,
    // Error handling
    ErrorCategory, OrdoError, Result,
};

pub mod array;
pub mod heap;
pub mod matrix;
pub mod priority_queue;
pub mod random;
pub mod render;
mod storage;
pub mod young_tableau;

pub use array::BoundedArray;
pub use heap::BinaryMaxHeap;
pub use matrix::BoundedMatrix;
pub use priority_queue::{MaxPriorityQueue, PriorityQueue};
pub use random::UniformRange;
pub use render::RenderConfig;
pub use young_tableau::YoungTableau;
