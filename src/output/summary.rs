use serde::Serialize;

use crate::report::CoverageReport;
use crate::scanner::TestCase;

#[derive(Debug, Serialize)]
pub struct JsonSummary {
    pub title: String,
    pub test_file: String,
    pub total_tests: usize,
    pub total_categories: usize,
    pub categories: Vec<Category>,
    pub missing_critical: Vec<String>,
    pub passed: bool,
}

#[derive(Debug, Serialize)]
pub struct Category {
    pub tag: String,
    pub count: usize,
    pub tests: Vec<TestEntry>,
}

#[derive(Debug, Serialize)]
pub struct TestEntry {
    pub name: String,
    pub line: usize,
}

impl JsonSummary {
    pub fn from_report(report: &CoverageReport, title: &str) -> Self {
        let categories = report
            .groups
            .iter()
            .map(|(tag, cases)| Category {
                tag: tag.to_string(),
                count: cases.len(),
                tests: cases.iter().map(TestEntry::from).collect(),
            })
            .collect();

        JsonSummary {
            title: title.to_string(),
            test_file: report.test_file().display().to_string(),
            total_tests: report.total_tests(),
            total_categories: report.total_categories(),
            categories,
            missing_critical: report.missing_critical().to_vec(),
            passed: report.passed(),
        }
    }
}

impl From<&TestCase> for TestEntry {
    fn from(case: &TestCase) -> Self {
        TestEntry {
            name: case.name.clone(),
            line: case.line,
        }
    }
}
