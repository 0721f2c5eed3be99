mod patterns;

use serde::Serialize;
use tracing::{debug, trace};

use patterns::TEST_CASE_RE;

/// A single `TEST_CASE` invocation found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub name: String,
    pub tag: String,
    /// 1-based line of the `TEST_CASE` token.
    pub line: usize,
}

impl TestCase {
    pub fn new(name: impl Into<String>, tag: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            line,
        }
    }
}

/// Extracts every `TEST_CASE("name", "[tag]")` call from `text`, in order of
/// appearance. Duplicates are kept.
///
/// This is a textual match only: calls inside comments or string literals are
/// reported too, and escaped quotes in the name end the match early.
pub fn extract_test_cases(text: &str) -> Vec<TestCase> {
    let mut cases = Vec::new();
    let mut line = 1;
    let mut cursor = 0;

    for caps in TEST_CASE_RE.captures_iter(text) {
        let (Some(whole), Some(name), Some(tag)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };

        line += text[cursor..whole.start()].matches('\n').count();
        cursor = whole.start();

        trace!(name = name.as_str(), tag = tag.as_str(), line, "matched test case");
        cases.push(TestCase::new(name.as_str(), tag.as_str(), line));
    }

    debug!(count = cases.len(), "extracted test cases");
    cases
}
