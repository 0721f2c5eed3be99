use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::ReportConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "suite-summary")]
#[command(about = "Test suite summary - group TEST_CASE macros by tag and check critical coverage", long_about = None)]
pub struct Args {
    /// Test source file to analyze [default: test_app/main/test_macropad.c]
    #[arg(long, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Config file (JSON or YAML) with test_file, critical_tags and title
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Critical tag that must be covered. Can be specified multiple times;
    /// replaces the configured list.
    #[arg(long, value_name = "TAG")]
    pub critical: Vec<String>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output (the report is still printed)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Checks inputs that are not the test file itself. A missing test file is
    /// reported by the analyzer so it gets its own exit code.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref config_path) = self.config {
            if !config_path.is_file() {
                anyhow::bail!("Config file does not exist: {}", config_path.display());
            }
        }
        if self.critical.iter().any(|tag| tag.trim().is_empty()) {
            anyhow::bail!("Critical tags must not be empty");
        }
        Ok(())
    }

    /// Defaults, then the config file, then command-line flags.
    pub fn resolve_config(&self) -> Result<ReportConfig> {
        let base = match self.config {
            Some(ref path) => ReportConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => ReportConfig::default(),
        };
        Ok(base.with_overrides(self.path.clone(), self.critical.clone()))
    }
}
