use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::{IoError, Result};
use crate::report::CoverageReport;
use crate::scanner::extract_test_cases;

/// Reads a test source file and builds its coverage report.
pub struct Analyzer {
    critical_tags: Vec<String>,
}

impl Analyzer {
    pub fn new(critical_tags: Vec<String>) -> Self {
        Self { critical_tags }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.critical_tags.clone())
    }

    pub fn analyze<P: AsRef<Path>>(&self, path: P) -> Result<CoverageReport> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading test file");

        let content = fs::read_to_string(path).map_err(|e| IoError::from_read(path, e))?;
        Ok(self.analyze_source(path, &content))
    }

    /// Same as [`Analyzer::analyze`] for text that is already in memory.
    pub fn analyze_source<P: AsRef<Path>>(&self, path: P, content: &str) -> CoverageReport {
        let cases = extract_test_cases(content);
        let report = CoverageReport::build(path.as_ref(), cases, &self.critical_tags);
        info!(
            total = report.total_tests(),
            categories = report.total_categories(),
            passed = report.passed(),
            "analyzed test file"
        );
        report
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}
