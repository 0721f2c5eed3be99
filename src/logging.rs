use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Log verbosity selected by `-q` / `-v` flags. Variants are ordered from
/// least to most output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// `-q` discards log events entirely.
    fn emits_logs(self) -> bool {
        self != Self::Quiet
    }

    fn to_filter(self) -> String {
        let level = self.to_level();
        format!("suite_summary={level}")
    }
}

/// Installs the global subscriber. Logs go to stderr, or nowhere when quiet;
/// stdout carries only the report.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .compact();

    if !verbosity.emits_logs() {
        subscriber.with_writer(std::io::sink).init();
        return;
    }

    match verbosity {
        Verbosity::Normal => subscriber.with_writer(std::io::stderr).without_time().init(),
        _ => subscriber.with_writer(std::io::stderr).init(),
    }
}
