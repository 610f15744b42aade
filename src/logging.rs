use flexi_logger::{colored_default_format, Logger, LoggerHandle};

/// Starts the logger on stderr, using `RUST_LOG` when set and `default_level` otherwise.
///
/// The returned handle must stay alive for as long as logging is needed.
pub fn setup_logging(default_level: &str) -> crate::Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(default_level)?
        .format(colored_default_format)
        .start()?;
    Ok(handle)
}
