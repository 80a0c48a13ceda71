//! Abstract interfaces for ordo structures
//!
//! This module defines the trait abstractions shared by the containers and
//! the structures built on top of them. Traits are pure interfaces; the
//! concrete types live in the `ordo` crate.

pub mod element;
pub mod grid;
pub mod heap;
pub mod sequence;

pub use element::{Element, SignedElement};
#[cfg(feature = "alloc")]
pub use grid::GridOperations;
pub use grid::Grid;
pub use heap::{left, parent, right, HeapAccess};
pub use sequence::OneIndexed;
