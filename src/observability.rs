//! This module provides logging and diagnostics for the arraykit plan executor.
//!
//! Library code only ever talks to the `log` facade. `init_logging` installs an
//! `env_logger` backend for binaries and tests that want to see that output, and
//! the `log_metric!` macro emits structured key-value lines in debug builds.
//!
//! `log_metric!` is compiled out of release builds through `#[cfg(debug_assertions)]`.

use colored::Colorize;
use log::{Level, LevelFilter};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Once;

use crate::error::ArrayKitError;

/// Logs a structured key-value metric string to stdout, only in debug builds.
///
/// # Example
/// ```
/// use arraykit::log_metric;
/// let len = 4;
/// log_metric!("event"="dispatch", "op"="reverse", "len"=&len);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            let output = format!("ARRAYKIT_METRIC: {{ {} }}", parts.join(", "));
            println!("{}", output);
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs the process-wide `env_logger` backend. Only the first call has any effect.
///
/// Records are written as `[LEVEL] message`. The level tag is colored on a
/// terminal and left plain when `log_file` redirects output to a file opened in
/// append mode.
pub fn init_logging(level: LevelFilter, log_file: Option<&str>) -> Result<(), ArrayKitError> {
    let file = match log_file {
        Some(path) => Some(
            OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)
                .map_err(|e| {
                    ArrayKitError::Config(format!("cannot open log file {}: {}", path, e))
                })?,
        ),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();
        builder.is_test(false);
        builder.filter_level(level);

        let colorize = file.is_none();
        builder.format(move |buf, record| {
            let tag = record.level().to_string();
            let tag = if colorize { paint_level(record.level(), &tag) } else { tag };
            writeln!(buf, "[{}] {}", tag, record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });

    Ok(())
}

fn paint_level(level: Level, tag: &str) -> String {
    match level {
        Level::Error => tag.red().bold().to_string(),
        Level::Warn => tag.yellow().to_string(),
        Level::Info => tag.green().to_string(),
        Level::Debug => tag.cyan().to_string(),
        Level::Trace => tag.dimmed().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        assert!(init_logging(LevelFilter::Debug, None).is_ok());
        assert!(init_logging(LevelFilter::Info, None).is_ok());
        log::info!("logger installed");
    }

    #[test]
    fn test_unopenable_log_file_is_reported() {
        let result = init_logging(LevelFilter::Info, Some("/nonexistent-dir/arraykit.log"));
        assert!(matches!(result, Err(ArrayKitError::Config(_))));
    }

    #[test]
    fn test_paint_level_keeps_tag_text() {
        colored::control::set_override(false);
        assert_eq!(paint_level(Level::Warn, "WARN"), "WARN");
        colored::control::unset_override();
    }

    #[test]
    fn test_log_metric_expands() {
        let len = 3usize;
        log_metric!("event" = "test", "len" = &len);
    }
}
