//! Demo configuration
//!
//! The defaults reproduce the fixed scenario: sort `[5, 2, 9, 1, 3]` and
//! search for `3`.

use crate::error::{AppError, Result};
use sortkit_core::{parse_int_list, SortkitError};

/// Largest input list accepted from the command line
pub const MAX_VALUES: usize = 64;

/// Values sorted when none are given
pub const DEFAULT_VALUES: [i32; 5] = [5, 2, 9, 1, 3];

/// Target searched for when none is given
pub const DEFAULT_TARGET: i32 = 3;

/// Input for one demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Values to sort, in input order
    pub values: Vec<i32>,
    /// Value to search for after sorting
    pub target: i32,
}

impl DemoConfig {
    /// Replace the values to sort
    pub fn with_values(mut self, values: impl Into<Vec<i32>>) -> Self {
        self.values = values.into();
        self
    }

    /// Set the search target
    pub fn with_target(mut self, target: i32) -> Self {
        self.target = target;
        self
    }

    /// Replace the values with a parsed comma-separated list
    ///
    /// At most [`MAX_VALUES`] items are accepted.
    pub fn with_value_list(self, list: &str) -> Result<Self> {
        let mut buffer = [0i32; MAX_VALUES];
        let count = parse_int_list(list, &mut buffer).map_err(|reason| match reason {
            SortkitError::InsufficientBuffer => AppError::TooManyValues { max: MAX_VALUES },
            reason => AppError::InvalidValues {
                list: list.to_string(),
                reason,
            },
        })?;

        Ok(self.with_values(&buffer[..count]))
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            values: DEFAULT_VALUES.to_vec(),
            target: DEFAULT_TARGET,
        }
    }
}
