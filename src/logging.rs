//! Module implementing logging for the application.
//!
//! Records go to a `slog` root logger printing to standard error.
//! The `log` macros used throughout the library are routed into it
//! through `slog-stdlog`.

use std::env;
use std::sync::Mutex;

use log::SetLoggerError;
use slog::{self, Drain, FilterLevel, Logger};
use slog_envlogger::LogBuilder;


/// Environment variable with additional log filtering directives.
const FILTER_ENV_VAR: &str = "RUST_LOG";


/// Initialize logging with given verbosity.
/// The verbosity value has the same meaning as in args::Options::verbosity.
pub fn init(verbosity: isize) -> Result<(), SetLoggerError> {
    let level = filter_level(verbosity);

    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::CompactFormat::new(decorator).build();

    let mut builder = LogBuilder::new(drain).filter(None, level);
    if let Ok(directives) = env::var(FILTER_ENV_VAR) {
        builder = builder.parse(&directives);
    }
    let drain = Mutex::new(builder.build()).fuse();

    let logger = Logger::root(drain, slog::o!());
    slog_scope::set_global_logger(logger).cancel_reset();
    slog_stdlog::init_with_level(log::Level::Trace)?;

    debug!("Logging initialized at level {:?}", level);
    Ok(())
}

/// Translate verbosity into the minimum level of records that are shown.
fn filter_level(verbosity: isize) -> FilterLevel {
    match verbosity {
        v if v <= -3 => FilterLevel::Critical,
        -2 => FilterLevel::Error,
        -1 => FilterLevel::Warning,
        0 => FilterLevel::Info,
        1 => FilterLevel::Debug,
        _ => FilterLevel::Trace,
    }
}


#[cfg(test)]
mod tests {
    use slog::FilterLevel;
    use spectral::prelude::*;
    use super::filter_level;

    #[test]
    fn verbosity_levels() {
        assert_that!(filter_level(0)).is_equal_to(FilterLevel::Info);
        assert_that!(filter_level(1)).is_equal_to(FilterLevel::Debug);
        assert_that!(filter_level(5)).is_equal_to(FilterLevel::Trace);
        assert_that!(filter_level(-1)).is_equal_to(FilterLevel::Warning);
        assert_that!(filter_level(-2)).is_equal_to(FilterLevel::Error);
        assert_that!(filter_level(-9)).is_equal_to(FilterLevel::Critical);
    }
}
