mod groups;

pub use groups::TagGroups;

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::scanner::TestCase;

/// Tags that must be present for a suite to count as covered.
pub const DEFAULT_CRITICAL_TAGS: [&str; 4] = ["storage", "state", "button", "integration"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No `TEST_CASE` calls were found; critical tags were not checked.
    NoTests,
    /// Critical tags absent from the suite, in critical-list order.
    Incomplete { missing: Vec<String> },
    Complete,
}

#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub test_file: PathBuf,
    pub groups: TagGroups,
    pub outcome: Outcome,
}

impl CoverageReport {
    pub fn build<S: AsRef<str>>(
        test_file: impl Into<PathBuf>,
        cases: Vec<TestCase>,
        critical_tags: &[S],
    ) -> Self {
        let test_file = test_file.into();

        if cases.is_empty() {
            return Self {
                test_file,
                groups: TagGroups::new(),
                outcome: Outcome::NoTests,
            };
        }

        let groups: TagGroups = cases.into_iter().collect();
        let missing = missing_critical(&groups, critical_tags);
        debug!(
            total = groups.total(),
            categories = groups.len(),
            missing = missing.len(),
            "built coverage report"
        );

        let outcome = if missing.is_empty() {
            Outcome::Complete
        } else {
            Outcome::Incomplete { missing }
        };

        Self {
            test_file,
            groups,
            outcome,
        }
    }

    pub fn test_file(&self) -> &Path {
        &self.test_file
    }

    pub fn total_tests(&self) -> usize {
        self.groups.total()
    }

    pub fn total_categories(&self) -> usize {
        self.groups.len()
    }

    pub fn missing_critical(&self) -> &[String] {
        match &self.outcome {
            Outcome::Incomplete { missing } => missing,
            _ => &[],
        }
    }

    /// True only when tests were found and every critical tag is covered.
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Complete
    }
}

fn missing_critical<S: AsRef<str>>(groups: &TagGroups, critical_tags: &[S]) -> Vec<String> {
    critical_tags
        .iter()
        .map(|tag| tag.as_ref())
        .filter(|tag| !groups.contains(tag))
        .map(str::to_string)
        .collect()
}
