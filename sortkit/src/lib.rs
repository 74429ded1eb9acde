//! sortkit - sort, search and print a small integer array
//!
//! The demo driver around the [`sortkit_core`] routines.
//!
//! ## Architecture
//!
//! - **sortkit-core**: the algorithms, validation and error type (`no_std`, no I/O)
//! - **sortkit**: configuration, the text/JSON output driver, and the CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use sortkit::{demo, DemoConfig};
//!
//! let outcome = demo::run(&DemoConfig::default());
//! assert_eq!(outcome.sorted, vec![1, 2, 3, 5, 9]);
//! assert_eq!(outcome.index, 2);
//!
//! let mut out = Vec::new();
//! demo::write_text(&outcome, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("sorted numbers\n1\n"));
//!
//! assert_eq!(sortkit::to_decimal_string(i32::MIN), "-2147483648");
//! ```

// Re-export core routines and types
pub use sortkit_core::{
    binary_search, find, int_to_string, is_sorted, parse_int, sort, sort_with_stats,
    to_decimal_string, DecimalBuffer, SortStats, SortkitError, NOT_FOUND,
};

pub mod config;
pub mod demo;
pub mod error;
#[cfg(feature = "serde")]
pub mod report;

pub use config::{DemoConfig, MAX_VALUES};
pub use demo::DemoOutcome;
pub use error::AppError;
#[cfg(feature = "serde")]
pub use report::RunReport;
