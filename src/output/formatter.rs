use anyhow::Result;
use std::fmt::{self, Write};

use crate::cli::OutputFormat;
use crate::report::{CoverageReport, Outcome};

use super::JsonSummary;

const RULE_WIDTH: usize = 70;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(report: &CoverageReport, format: OutputFormat, title: &str) -> Result<String> {
        match format {
            OutputFormat::Text => Self::format_text(report, title),
            OutputFormat::Json => {
                let summary = JsonSummary::from_report(report, title);
                let mut json = serde_json::to_string_pretty(&summary)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// Renders the human-readable summary. Every line, including the last,
    /// ends with `\n`.
    pub fn format_text(report: &CoverageReport, title: &str) -> Result<String> {
        let mut out = String::new();
        write_text(&mut out, report, title)?;
        Ok(out)
    }
}

fn write_text<W: Write>(out: &mut W, report: &CoverageReport, title: &str) -> fmt::Result {
    if report.outcome == Outcome::NoTests {
        return writeln!(out, "❌ No test cases found!");
    }

    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;

    writeln!(out, "Total Tests: {}", report.total_tests())?;
    writeln!(out, "Test Categories: {}", report.total_categories())?;
    writeln!(out)?;

    for (tag, cases) in report.groups.iter() {
        writeln!(out, "[{tag}] - {} tests", cases.len())?;
        for case in cases {
            writeln!(out, "  • {}", case.name)?;
        }
        writeln!(out)?;
    }

    match &report.outcome {
        Outcome::Incomplete { missing } => writeln!(
            out,
            "⚠️  Warning: Missing tests for critical areas: {}",
            missing.join(", ")
        ),
        _ => writeln!(out, "✅ All critical areas have test coverage"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DEFAULT_CRITICAL_TAGS;
    use crate::scanner::TestCase;
    use pretty_assertions::assert_eq;

    fn report(pairs: &[(&str, &str)]) -> CoverageReport {
        let cases = pairs
            .iter()
            .enumerate()
            .map(|(i, (name, tag))| TestCase::new(*name, *tag, i + 1))
            .collect();
        CoverageReport::build("test_macropad.c", cases, &DEFAULT_CRITICAL_TAGS)
    }

    #[test]
    fn test_text_no_tests() {
        let text = OutputFormatter::format_text(&report(&[]), "Suite").unwrap();
        assert_eq!(text, "❌ No test cases found!\n");
    }

    #[test]
    fn test_text_complete_layout() {
        let report = report(&[
            ("Save macro", "storage"),
            ("Init state", "state"),
            ("Touch inside", "button"),
            ("Load macro", "storage"),
            ("Workflow", "integration"),
        ]);
        let rule = "=".repeat(70);
        let expected = format!(
            "{rule}\nMacroPad Test Suite Summary\n{rule}\n\n\
             Total Tests: 5\n\
             Test Categories: 4\n\n\
             [button] - 1 tests\n  • Touch inside\n\n\
             [integration] - 1 tests\n  • Workflow\n\n\
             [state] - 1 tests\n  • Init state\n\n\
             [storage] - 2 tests\n  • Save macro\n  • Load macro\n\n\
             ✅ All critical areas have test coverage\n"
        );
        assert_eq!(
            OutputFormatter::format_text(&report, "MacroPad Test Suite Summary").unwrap(),
            expected
        );
    }

    #[test]
    fn test_text_warning_lists_missing() {
        let report = report(&[("Touch inside", "button")]);
        let text = OutputFormatter::format_text(&report, "Suite").unwrap();
        assert!(text.ends_with(
            "⚠️  Warning: Missing tests for critical areas: storage, state, integration\n"
        ));
        assert!(!text.contains("✅"));
    }

    #[test]
    fn test_text_alpha_before_zeta() {
        let report = report(&[("z", "zeta"), ("a", "alpha")]);
        let text = OutputFormatter::format_text(&report, "Suite").unwrap();
        let alpha = text.find("[alpha]").unwrap();
        let zeta = text.find("[zeta]").unwrap();
        assert!(alpha < zeta);
    }

    struct FailAfter(usize);

    impl Write for FailAfter {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            if self.0 == 0 {
                return Err(fmt::Error);
            }
            self.0 -= 1;
            Ok(())
        }
    }

    #[test]
    fn test_write_error_propagates() {
        let incomplete = report(&[("Touch inside", "button")]);
        assert!(write_text(&mut FailAfter(3), &incomplete, "Suite").is_err());
        assert!(write_text(&mut FailAfter(0), &report(&[]), "Suite").is_err());
    }

    #[test]
    fn test_json_output() {
        let report = report(&[("Touch inside", "button"), ("Touch outside", "button")]);
        let json = OutputFormatter::format(&report, OutputFormat::Json, "Suite").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Suite");
        assert_eq!(value["total_tests"], 2);
        assert_eq!(value["total_categories"], 1);
        assert_eq!(value["categories"][0]["tag"], "button");
        assert_eq!(value["categories"][0]["tests"][1]["name"], "Touch outside");
        assert_eq!(value["categories"][0]["tests"][1]["line"], 2);
        assert_eq!(value["passed"], false);
        assert_eq!(value["missing_critical"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_json_no_tests() {
        let json = OutputFormatter::format(&report(&[]), OutputFormat::Json, "Suite").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_tests"], 0);
        assert!(value["categories"].as_array().unwrap().is_empty());
        assert!(value["missing_critical"].as_array().unwrap().is_empty());
        assert_eq!(value["passed"], false);
    }
}
