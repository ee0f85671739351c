use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Level filter: `off`, `error`, `warn`, `info`, `debug` or `trace`.
pub const LEVEL_ENV: &str = "CSSEL_LOG";
/// When set, log lines are appended to this file instead of stderr.
pub const FILE_ENV: &str = "CSSEL_LOG_FILE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    pub file: Option<PathBuf>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            file: None,
        }
    }
}

impl LoggerConfig {
    /// Reads `CSSEL_LOG` and `CSSEL_LOG_FILE`. Unknown level names fall back to `info`.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(LEVEL_ENV).ok().as_deref(),
            std::env::var_os(FILE_ENV).map(PathBuf::from),
        )
    }

    pub fn from_values(level: Option<&str>, file: Option<PathBuf>) -> Self {
        let level = level
            .and_then(|name| name.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);
        Self { level, file }
    }
}

struct CsselLogger {
    level: LevelFilter,
    file: Option<PathBuf>,
}

impl Log for CsselLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        match &self.file {
            Some(path) => {
                if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                    let _ = writeln!(file, "{line}");
                }
            }
            None => eprintln!("{line}"),
        }
    }

    fn flush(&self) {}
}

/// Installs the process-wide logger. Fails if a logger is already set.
pub fn init_logger(config: LoggerConfig) -> Result<(), SetLoggerError> {
    let level = config.level;
    let logger = CsselLogger {
        level,
        file: config.file,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
