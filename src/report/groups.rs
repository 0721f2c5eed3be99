use std::collections::BTreeMap;

use crate::scanner::TestCase;

/// Test cases keyed by tag. Iteration is in ascending tag order; cases under
/// a tag stay in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagGroups {
    groups: BTreeMap<String, Vec<TestCase>>,
}

impl TagGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, case: TestCase) {
        self.groups.entry(case.tag.clone()).or_default().push(case);
    }

    pub fn get(&self, tag: &str) -> Option<&[TestCase]> {
        self.groups.get(tag).map(Vec::as_slice)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.groups.contains_key(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TestCase])> {
        self.groups
            .iter()
            .map(|(tag, cases)| (tag.as_str(), cases.as_slice()))
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of test cases across all tags.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl FromIterator<TestCase> for TagGroups {
    fn from_iter<I: IntoIterator<Item = TestCase>>(iter: I) -> Self {
        let mut groups = Self::new();
        for case in iter {
            groups.insert(case);
        }
        groups
    }
}
