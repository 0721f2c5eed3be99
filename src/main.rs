use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::fs;
use std::process::ExitCode;
use suite_summary::error::{Error, IoError};
use suite_summary::logging::{self, Verbosity};
use suite_summary::output::OutputFormatter;
use suite_summary::{cli, exit_code, Analyzer};

fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    match run(&args) {
        Ok(true) => ExitCode::from(exit_code::SUCCESS),
        Ok(false) => ExitCode::from(exit_code::INCOMPLETE),
        Err(err) => match err.downcast_ref::<Error>() {
            Some(Error::Io(IoError::FileNotFound { path })) => {
                println!("❌ Test file not found: {}", path.display());
                ExitCode::from(exit_code::FILE_NOT_FOUND)
            }
            _ => {
                println!("❌ Error: {err:#}");
                ExitCode::from(exit_code::ERROR)
            }
        },
    }
}

fn run(args: &cli::Args) -> Result<bool> {
    args.validate().context("Invalid arguments")?;
    let config = args.resolve_config()?;

    let report = Analyzer::from_config(&config).analyze(&config.test_file)?;
    let rendered = OutputFormatter::format(&report, args.format, &config.title)?;

    match args.output_file {
        Some(ref output_path) => {
            fs::write(output_path, &rendered).map_err(|e| IoError::write_error(output_path, e))?;
            tracing::info!(path = %output_path.display(), "wrote report");
        }
        None => print!("{rendered}"),
    }

    Ok(report.passed())
}
