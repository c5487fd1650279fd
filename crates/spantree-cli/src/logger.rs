/// Minimal stderr backend for the `log` facade.
///
/// The core library only emits records; this is the sole place that decides
/// where they go. `--verbose` shows `debug` records from every crate,
/// `--quiet` shows errors only, and the default is `warn`.
use std::io::Write as _;

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = record.level().as_str().to_ascii_lowercase();
        // A closed stderr has nowhere to report to.
        writeln!(
            std::io::stderr().lock(),
            "{level}: [{}] {}",
            record.target(),
            record.args()
        )
        .ok();
    }

    fn flush(&self) {
        std::io::stderr().flush().ok();
    }
}

/// Maps the global flags onto a level filter.
pub fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the stderr logger. Calling it twice keeps the first logger.
pub fn init(quiet: bool, verbose: bool) {
    let level = level_for(quiet, verbose);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
