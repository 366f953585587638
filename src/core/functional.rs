//! Reusable function values: checked casts, type tests and null-propagating
//! maps.
//!
//! Type descriptors are Rust type parameters and loosely-typed values are
//! `dyn Any`. Rust has no subtyping, so compatibility means the value is
//! exactly of the requested type.

use crate::utils::error::{CommonsError, Result};
use std::any::{type_name, Any};

fn mismatch<T>() -> CommonsError {
    CommonsError::TypeMismatch {
        expected: type_name::<T>(),
    }
}

/// Downcasts a borrowed value, failing with a type mismatch if it is not a `T`.
pub fn cast_ref<T: Any>(value: &dyn Any) -> Result<&T> {
    value.downcast_ref::<T>().ok_or_else(mismatch::<T>)
}

/// Downcasts an owned value, failing with a type mismatch if it is not a `T`.
pub fn cast_boxed<T: Any>(value: Box<dyn Any>) -> Result<Box<T>> {
    value.downcast::<T>().map_err(|_| mismatch::<T>())
}

/// Returns a reusable function casting borrowed values to `T`.
pub fn cast_to<T: Any>() -> for<'v> fn(&'v dyn Any) -> Result<&'v T> {
    cast_ref::<T>
}

/// Returns a reusable function casting owned values to `T`.
pub fn cast_boxed_to<T: Any>() -> fn(Box<dyn Any>) -> Result<Box<T>> {
    cast_boxed::<T>
}

/// Returns a reusable predicate testing whether a value is a `T`.
pub fn instance_of<T: Any>() -> fn(&dyn Any) -> bool {
    |value| value.is::<T>()
}

/// Applies `mapper` to a present value; an absent value stays absent and
/// `mapper` is never called.
pub fn map_safely<T, U>(value: Option<T>, mapper: impl FnOnce(T) -> U) -> Option<U> {
    value.map(mapper)
}
