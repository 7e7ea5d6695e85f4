//! Generic operations over ordered sequences.
//!
//! [`immutable`] borrows a slice and returns a fresh value; [`mutable`]
//! rewrites the caller's sequence in place. Each reordering operation exists
//! in both forms and the copying form is built on the in-place one, so the
//! two always agree.
//!
//! Search functions report misses with the [`NOT_FOUND`] index instead of an
//! error. Out-of-range positions and empty inputs where an element is
//! required fail with [`ListError`] and leave the sequence untouched.

mod error;
mod util;

pub mod immutable;
pub mod mutable;

pub use error::{ListError, Result};
pub use immutable::{
    Found, NOT_FOUND, clone_shallow, contains, every, every_indexed, find, find_first,
    find_first_index, find_first_index_indexed, find_first_indexed, find_index, find_last,
    find_last_index, find_last_index_indexed, find_last_indexed, first_index_of, flat_map,
    flat_map_indexed, flat_map_not_null, flat_map_not_null_indexed, fold, fold_indexed, index_of,
    last_index_of, map, map_indexed, map_not_null, map_not_null_indexed, reduce, reduce_indexed,
    some, some_indexed, to_filtered, to_filtered_indexed, to_reversed, to_shuffled,
    to_shuffled_rng, to_sorted, to_sorted_unstable, to_uniquified, to_uniquified_hashed, zip,
    zip_indexed,
};
pub use mutable::{
    clear, filter, filter_in_range, filter_indexed, filter_out_range, insert_all, insert_all_at,
    insert_all_first, insert_all_last, insert_at, insert_first, insert_last, pick, pick_rng, pop,
    push, remove_at, remove_first, remove_last, reverse, shuffle, shuffle_rng, sort,
    sort_unstable, times, toggle, uniquify, uniquify_hashed,
};
