// Tue Jan 13 2026 - Alex

use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::time::Instant;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs a level-tagged stderr logger. Does nothing if a logger is
    /// already installed.
    pub fn init_logger(level: LevelFilter) {
        if log::set_boxed_logger(Box::new(StderrLogger { level })).is_ok() {
            log::set_max_level(level);
        }
    }

    /// Installs `env_logger`, honouring `RUST_LOG` and defaulting to `info`.
    pub fn init_from_env() {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format_timestamp(None)
            .try_init();
    }
}

struct StderrLogger {
    level: LevelFilter,
}

fn level_tag(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red().bold(),
        Level::Warn => "WARN ".yellow().bold(),
        Level::Info => "INFO ".green().bold(),
        Level::Debug => "DEBUG".blue().bold(),
        Level::Trace => "TRACE".magenta().bold(),
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let target = format!("[{}]", record.target());
            eprintln!("{} {} {}", level_tag(record.level()), target.dimmed(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Logs how long a phase took when dropped.
pub struct ScopedTimer {
    name: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &str) -> Self {
        log::debug!("{} started", name);
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        log::debug!("{} took {:.2}ms", self.name, self.elapsed_ms());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_logger_filters_by_level() {
        let logger = StderrLogger { level: LevelFilter::Info };
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_init_is_repeatable() {
        LoggingUtils::init_from_env();
        LoggingUtils::init_from_env();
        LoggingUtils::init_logger(LevelFilter::Debug);
    }

    #[test]
    fn test_scoped_timer() {
        let timer = ScopedTimer::new("test");
        assert!(timer.elapsed_ms() >= 0.0);
    }
}
