//! Validation utilities for slices, buffers and numeric text
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod order;
pub mod parsing;

pub use bounds::{required_capacity, validate_capacity, validate_length, MAX_DECIMAL_LEN};
pub use order::is_sorted;
pub use parsing::{parse_int, parse_int_list};
