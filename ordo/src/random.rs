//! Sampling configuration for randomized container fills
//!
//! Randomness is always injected by the caller; containers never reach for a
//! global generator. Seed a `rand::rngs::StdRng` for reproducible fills.

use ordo_core::{validate_range, Element, Result, SignedElement};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

/// Validated inclusive sampling range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRange<T> {
    min: T,
    max: T,
}

impl<T: Element> UniformRange<T> {
    /// Create a range, rejecting `min > max`
    pub fn new(min: T, max: T) -> Result<Self> {
        validate_range(&min, &max)?;
        Ok(Self { min, max })
    }

    /// Default range for array fills: `[1, 30]`
    pub fn array_default() -> Self {
        Self {
            min: T::from_i64(1),
            max: T::from_i64(30),
        }
    }

    /// Default range for matrix fills: `[1, 50]`
    pub fn matrix_default() -> Self {
        Self {
            min: T::from_i64(1),
            max: T::from_i64(50),
        }
    }

    /// Set the lower bound
    pub fn with_min(self, min: T) -> Result<Self> {
        Self::new(min, self.max)
    }

    /// Set the upper bound
    pub fn with_max(self, max: T) -> Result<Self> {
        Self::new(self.min, max)
    }

    /// Lower bound, inclusive
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound, inclusive
    pub fn max(&self) -> T {
        self.max
    }

    /// Check if a value falls within this range
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl<T: SignedElement> UniformRange<T> {
    /// Default increment range for random walks: `[-3, 5]`
    pub fn walk_default() -> Self {
        Self {
            min: T::from_i64(-3),
            max: T::from_i64(5),
        }
    }
}

impl<T: Element + SampleUniform> UniformRange<T> {
    /// Draw one value uniformly from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        rng.gen_range(self.min..=self.max)
    }
}
