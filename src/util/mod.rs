//! Utility functions

mod ordering;

pub use ordering::{try_cmp, try_sort_by};
