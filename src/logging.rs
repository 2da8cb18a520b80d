use std::env;

use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Initialize logging with a level taken from the `KNIGHT_PATHS_LOG`
/// environment variable. Defaults to `info` if the variable is not set or
/// invalid.
pub fn init_logging() {
    let level = env::var("KNIGHT_PATHS_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

/// A leveled diagnostic side channel.
///
/// The interactive session reports progress and user errors through this
/// trait instead of the process-wide logger, so callers decide where the
/// messages go and tests can capture them.
pub trait DiagnosticSink {
    fn info(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Sink forwarding to the `log` macros.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn info(&mut self, message: &str) {
        log::info!("{}", message);
    }

    fn error(&mut self, message: &str) {
        log::error!("{}", message);
    }
}
