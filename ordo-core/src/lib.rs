#![no_std]

//! Ordo Core - Definitions for one-indexed, invariant-driven structures
//!
//! This crate provides the error taxonomy, element and access traits, heap
//! index arithmetic and bounds validation shared by the `ordo` containers.
//! It performs no allocation unless the `alloc` feature is enabled.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod validation;
pub mod value;

pub use error::*;
pub use traits::*;
pub use validation::{validate_coordinate, validate_index, validate_range, validate_shape};
pub use value::{MaybeValue, Subarray};
