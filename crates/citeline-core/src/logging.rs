//! Logging setup with indicatif integration
//!
//! The corpus is noisy, so warnings are the primary user-visible output.
//! In TTY mode log lines must not tear through active progress bars; the
//! wrapper logger routes them through `MultiProgress::suspend`.

use indicatif::MultiProgress;

/// Padded label and optional ANSI color for a log level.
fn level_label(level: log::Level, color: bool) -> String {
    let label = match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    };
    if !color {
        return label.to_string();
    }
    let ansi = match level {
        log::Level::Error => "\x1b[31m",
        log::Level::Warn => "\x1b[33m",
        log::Level::Info => "\x1b[32m",
        log::Level::Debug => "\x1b[36m",
        log::Level::Trace => "\x1b[35m",
    };
    format!("{ansi}{label}\x1b[0m")
}

/// Logger that prints through indicatif MultiProgress to avoid mixing with progress bars.
pub struct IndicatifLogger {
    inner: env_logger::Logger,
    multi: MultiProgress,
}

impl IndicatifLogger {
    pub fn new(inner: env_logger::Logger, multi: MultiProgress) -> Self {
        Self { inner, multi }
    }
}

impl log::Log for IndicatifLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if self.inner.enabled(record.metadata()) {
            let line = format!("[{}] {}", level_label(record.level(), true), record.args());
            self.multi.suspend(|| eprintln!("{line}"));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Initialize logging with optional TTY mode (indicatif integration)
pub fn init_logging(quiet: bool, debug: bool, multi: Option<&MultiProgress>) {
    use std::io::Write;

    let default_level = if debug {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    if let Some(multi) = multi {
        let logger = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(default_level),
        )
        .build();
        let max_level = logger.filter();

        log::set_boxed_logger(Box::new(IndicatifLogger::new(logger, multi.clone())))
            .expect("failed to init logger");
        log::set_max_level(max_level);
    } else {
        // Non-TTY: no ANSI colors
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] {}",
                    level_label(record.level(), false),
                    record.args()
                )
            })
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_fixed_width() {
        for level in [
            log::Level::Error,
            log::Level::Warn,
            log::Level::Info,
            log::Level::Debug,
            log::Level::Trace,
        ] {
            assert_eq!(level_label(level, false).len(), 5);
        }
    }

    #[test]
    fn colored_label_wraps_plain_label() {
        let plain = level_label(log::Level::Warn, false);
        let colored = level_label(log::Level::Warn, true);
        assert!(colored.contains(plain.trim_end()));
        assert!(colored.starts_with("\x1b["));
    }
}
