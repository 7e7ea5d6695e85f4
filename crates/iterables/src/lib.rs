//! Emptiness checks shared by scalar and container values.
//!
//! A value is empty when it equals the `Default` of its type: `0` for
//! numbers, `false`, `'\0'`, `""`, `None`, and any std collection with no
//! elements. Borrowed shapes such as `&str` and `&[T]` follow the same rule
//! because their default is the empty borrow.

/// Returns `true` if `value` is the zero value of its type.
#[inline]
pub fn is_empty<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

#[inline]
pub fn is_not_empty<T: Default + PartialEq>(value: &T) -> bool {
    !is_empty(value)
}
