//! Fallible allocation of container backing storage

use ordo_core::{Element, OrdoError, Result};

/// Allocate `length` zeroed elements, reporting allocation failure as an error
pub(crate) fn zeroed<T: Element>(length: usize) -> Result<Vec<T>> {
    filled(length, T::ZERO)
}

/// Allocate `length` copies of `value`
pub(crate) fn filled<T: Element>(length: usize, value: T) -> Result<Vec<T>> {
    let mut data = reserve(length)?;
    data.resize(length, value);
    Ok(data)
}

/// Copy a literal sequence into freshly reserved storage
pub(crate) fn copied<T: Element>(values: &[T]) -> Result<Vec<T>> {
    let mut data = reserve(values.len())?;
    data.extend_from_slice(values);
    Ok(data)
}

fn reserve<T>(length: usize) -> Result<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(length).map_err(|_| {
        tracing::debug!(requested = length, "backing storage reservation failed");
        OrdoError::Allocation { requested: length }
    })?;
    Ok(data)
}
