//! JSON run report

use std::io::Write;

use serde::{Deserialize, Serialize};
use sortkit_core::SortStats;

use crate::demo::DemoOutcome;
use crate::error::Result;

/// Serializable summary of a demo run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub input: Vec<i32>,
    pub sorted: Vec<i32>,
    pub target: i32,
    /// Index of `target` in `sorted`, -1 when absent
    pub index: i64,
    pub stats: SortStats,
}

impl From<&DemoOutcome> for RunReport {
    fn from(outcome: &DemoOutcome) -> Self {
        Self {
            input: outcome.input.clone(),
            sorted: outcome.sorted.clone(),
            target: outcome.target,
            index: outcome.index as i64,
            stats: outcome.stats,
        }
    }
}

/// Print `outcome` as pretty JSON followed by a newline
pub fn write_json<W: Write>(outcome: &DemoOutcome, out: &mut W) -> Result<()> {
    let report = RunReport::from(outcome);
    serde_json::to_writer_pretty(&mut *out, &report)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
