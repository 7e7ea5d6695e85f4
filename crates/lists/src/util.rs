use std::ops::{Bound, Range, RangeBounds};

use crate::error::{ListError, Result};

/// Resolves `range` against a sequence of length `len` into a half-open
/// `start..end` with `start <= end <= len`.
pub(crate) fn normalize_range<R: RangeBounds<usize>>(range: R, len: usize) -> Result<Range<usize>> {
    let start = match range.start_bound() {
        Bound::Included(&start) => Some(start),
        Bound::Excluded(&start) => start.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => Some(len),
    };

    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= len => Ok(start..end),
        (start, end) => {
            let err = ListError::InvalidRange {
                start: start.unwrap_or(usize::MAX),
                end: end.unwrap_or(usize::MAX),
                len,
            };
            tracing::debug!(%err, "rejected range");
            Err(err)
        }
    }
}

/// Insertion points are valid in `0..=len`.
#[inline]
pub(crate) fn check_insert_index(index: usize, len: usize) -> Result<()> {
    if index > len {
        let err = ListError::IndexOutOfRange { index, len };
        tracing::debug!(%err, "rejected insertion point");
        return Err(err);
    }
    Ok(())
}

/// Element positions are valid in `0..len`.
#[inline]
pub(crate) fn check_element_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        let err = ListError::IndexOutOfRange { index, len };
        tracing::debug!(%err, "rejected element index");
        return Err(err);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_non_empty(len: usize) -> Result<()> {
    if len == 0 {
        tracing::debug!("rejected empty sequence");
        return Err(ListError::Empty);
    }
    Ok(())
}
