#![no_std]

//! sortkit core - integer sorting, searching and decimal formatting
//!
//! Three stateless routines over caller-owned buffers:
//!
//! - [`sort`]: bubble sort into non-decreasing order, in place
//! - [`binary_search`]: interval halving over a sorted slice, `-1` when absent
//! - [`int_to_string`]: signed decimal text into a caller buffer, NUL terminated
//!
//! Nothing here allocates unless the `alloc` feature is enabled, and nothing
//! performs I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
pub mod search;
pub mod sort;
pub mod validation;

pub use error::*;
pub use format::{int_to_string, DecimalBuffer, NUL};
#[cfg(feature = "alloc")]
pub use format::to_decimal_string;
pub use search::{binary_search, binary_search_prefix, find, NOT_FOUND};
pub use sort::{sort, sort_prefix, sort_with_stats, SortStats};
pub use validation::{is_sorted, parse_int, parse_int_list, MAX_DECIMAL_LEN};
