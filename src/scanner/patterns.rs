use once_cell::sync::Lazy;
use regex::Regex;

/// `TEST_CASE("<name>", "[<tag>]")`, with any whitespace before the tag
/// argument. Group 1 is the name, group 2 the tag without brackets.
const TEST_CASE_PATTERN: &str = r#"TEST_CASE\("([^"]+)",\s*"\[([^\]]+)\]"\)"#;

pub static TEST_CASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(TEST_CASE_PATTERN).expect("TEST_CASE pattern is valid"));
