//! Element type constraints for ordo containers
//!
//! This module defines the trait that constrains what types can be stored
//! in bounded arrays, matrices, heaps and tableaux.

use core::fmt::{Debug, Display};
use core::ops::Add;

/// Trait for types that can be stored as container elements
///
/// All element types must be:
/// - Copy: deep copies of a container are plain element copies
/// - PartialOrd: heaps and tableaux order their contents
/// - Debug + Display: containers render themselves for diagnostics
///
/// Every element type reserves two sentinels. `INFINITY` marks an empty
/// tableau cell and must compare greater than or equal to every real value;
/// `NEG_INFINITY` is the placeholder a priority queue writes before raising
/// a freshly inserted key.
pub trait Element: Copy + PartialOrd + Debug + Display {
    /// Additive identity, used to zero-fill new containers
    const ZERO: Self;

    /// Largest sentinel
    const INFINITY: Self;

    /// Smallest sentinel
    const NEG_INFINITY: Self;

    /// Convert from i64 for generic construction
    ///
    /// Used to build default sampling ranges where the concrete element
    /// type is only known generically. Out-of-range values follow `as`
    /// cast semantics.
    fn from_i64(value: i64) -> Self;

    /// Whether this value is the `INFINITY` sentinel
    fn is_infinity(self) -> bool {
        self == Self::INFINITY
    }

    /// Whether this value does not compare with itself (a float NaN)
    fn is_unordered(self) -> bool {
        self.partial_cmp(&self).is_none()
    }
}

/// Element types that can take negative increments
///
/// Random walks accumulate increments drawn from ranges that may include
/// negative numbers, which only makes sense for signed types.
pub trait SignedElement: Element + Add<Output = Self> {}

macro_rules! impl_integer_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0;
                const INFINITY: Self = <$t>::MAX;
                const NEG_INFINITY: Self = <$t>::MIN;

                fn from_i64(value: i64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0.0;
                const INFINITY: Self = <$t>::INFINITY;
                const NEG_INFINITY: Self = <$t>::NEG_INFINITY;

                fn from_i64(value: i64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_integer_element!(i32, i64, u32, u64);
impl_float_element!(f32, f64);

impl SignedElement for i32 {}
impl SignedElement for i64 {}
impl SignedElement for f32 {}
impl SignedElement for f64 {}
