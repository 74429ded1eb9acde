//! Demonstration driver
//!
//! Sorts the configured values, searches for the target, and prints the
//! result as plain lines:
//!
//! ```text
//! sorted numbers
//! 1
//! 2
//! 3
//! 5
//! 9
//!
//! search result
//! 2
//! ```

use std::io::Write;

use sortkit_core::{binary_search, sort_with_stats, DecimalBuffer, SortStats, SortkitError};
use tracing::{debug, info};

use crate::config::DemoConfig;
use crate::error::Result;

/// Header printed before the sorted values
pub const SORTED_HEADER: &str = "sorted numbers";

/// Header printed before the search index
pub const SEARCH_HEADER: &str = "search result";

/// Everything one demo run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutcome {
    /// Values as configured, before sorting
    pub input: Vec<i32>,
    /// Values after sorting
    pub sorted: Vec<i32>,
    /// What the sort passes did
    pub stats: SortStats,
    /// Value searched for
    pub target: i32,
    /// Index of the target in `sorted`, or -1
    pub index: isize,
}

/// Sort and search according to `config`
pub fn run(config: &DemoConfig) -> DemoOutcome {
    let mut sorted = config.values.clone();
    let stats = sort_with_stats(&mut sorted);
    debug!(
        passes = stats.passes,
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "sorted {} values",
        sorted.len()
    );

    let index = binary_search(&sorted, config.target);
    info!(target_value = config.target, index, "search finished");

    DemoOutcome {
        input: config.values.clone(),
        sorted,
        stats,
        target: config.target,
        index,
    }
}

/// Print `outcome` as the plain line format
pub fn write_text<W: Write>(outcome: &DemoOutcome, out: &mut W) -> Result<()> {
    put_line(out, SORTED_HEADER)?;
    for &value in &outcome.sorted {
        put_number(out, value)?;
    }
    put_line(out, "")?;

    put_line(out, SEARCH_HEADER)?;
    let index = i32::try_from(outcome.index).map_err(|_| SortkitError::NumberOverflow)?;
    put_number(out, index)?;

    out.flush()?;
    Ok(())
}

/// Formats through a buffer scoped to this call
fn put_number<W: Write>(out: &mut W, value: i32) -> Result<()> {
    let mut buffer = DecimalBuffer::<{ sortkit_core::MAX_DECIMAL_LEN }>::new();
    let text = buffer.format(value)?;
    put_line(out, text)
}

fn put_line<W: Write>(out: &mut W, line: &str) -> Result<()> {
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
