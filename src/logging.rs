//! Tracing setup.
//!
//! The terminal belongs to the dashboard, so log lines never go to the screen:
//! they are written to a log file when one is configured, to stderr when stderr
//! is redirected away from the terminal, and dropped otherwise.

use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{AppError, AppResult};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    /// Maps `-q` and the number of `-v` flags to a level.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    pub fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Where log lines end up.
#[derive(Debug)]
pub enum LogSink {
    File(File),
    Stderr,
    Discard,
}

impl LogSink {
    pub fn resolve(log_file: Option<&Path>) -> AppResult<Self> {
        if let Some(path) = log_file {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| {
                    AppError::io_with_context(
                        source,
                        format!("failed to open log file: {}", path.display()),
                    )
                })?;
            return Ok(Self::File(file));
        }
        if io::stderr().is_terminal() {
            Ok(Self::Discard)
        } else {
            Ok(Self::Stderr)
        }
    }

    fn into_writer(self) -> BoxMakeWriter {
        match self {
            Self::File(file) => BoxMakeWriter::new(Mutex::new(file)),
            Self::Stderr => BoxMakeWriter::new(io::stderr),
            Self::Discard => BoxMakeWriter::new(io::sink),
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// `verbosity`. Calling this twice keeps the first subscriber.
pub fn init_logging(verbosity: Verbosity, sink: LogSink) {
    let default_filter = format!("clickdeck={}", verbosity.to_level());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));
    let ansi = matches!(sink, LogSink::Stderr);

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(sink.into_writer())
            .with_ansi(ansi)
            .with_target(true)
            .with_thread_ids(false),
    );

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use tracing::Level;

    use super::{LogSink, Verbosity, init_logging};

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("clickdeck_log_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn verbosity_flags_map_to_levels() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 5), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(true, 2), Verbosity::Quiet);

        assert_eq!(Verbosity::Quiet.to_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.to_level(), Level::INFO);
        assert_eq!(Verbosity::Verbose.to_level(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.to_level(), Level::TRACE);
    }

    #[test]
    fn resolve_opens_log_file_for_append() {
        let path = unique_temp_path("sink.log");
        let sink = LogSink::resolve(Some(&path)).expect("log file should open");
        assert!(matches!(sink, LogSink::File(_)));
        assert!(path.exists());
        fs::remove_file(&path).expect("log file should be removed");
    }

    #[test]
    fn resolve_reports_unopenable_log_file() {
        let dir = std::env::temp_dir();
        assert!(LogSink::resolve(Some(&dir)).is_err());
    }

    #[test]
    fn init_logging_tolerates_repeat_calls() {
        init_logging(Verbosity::Normal, LogSink::Discard);
        init_logging(Verbosity::Trace, LogSink::Discard);
    }
}
