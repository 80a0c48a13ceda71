//! Validation utilities for ordo containers
//!
//! This module contains pure validation functions with no allocation.
//! Containers call them before translating a one-indexed position into a
//! storage offset.

pub mod bounds;
pub mod range;

pub use bounds::{validate_coordinate, validate_index, validate_shape};
pub use range::validate_range;
