//! Suite Summary
//!
//! Scans a C test source for `TEST_CASE("name", "[tag]")` macros, groups the
//! tests by tag and checks that a set of critical tags is covered.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;
pub mod scanner;

pub use analyzer::Analyzer;
pub use config::ReportConfig;
pub use error::{Error, Result};
pub use report::{CoverageReport, Outcome, TagGroups};
pub use scanner::{extract_test_cases, TestCase};

/// Process exit codes used by the `suite-summary` binary.
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    /// No tests found, or a critical tag is missing.
    pub const INCOMPLETE: u8 = 1;
    pub const FILE_NOT_FOUND: u8 = 2;
    pub const ERROR: u8 = 3;
}
