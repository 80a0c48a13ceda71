//! Sampling range validation

use crate::OrdoError;

/// Validate an inclusive `[min, max]` range
///
/// Incomparable bounds (such as a NaN) are rejected along with `min > max`.
pub fn validate_range<T: PartialOrd>(min: &T, max: &T) -> Result<(), OrdoError> {
    if min <= max {
        Ok(())
    } else {
        Err(OrdoError::InvalidRange)
    }
}
