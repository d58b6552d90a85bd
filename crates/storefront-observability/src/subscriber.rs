//! Process-wide `tracing` subscriber.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::LogLevel;

/// Errors from subscriber setup.
#[derive(Error, Debug)]
pub enum SubscriberError {
    /// A global subscriber is already installed.
    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Level named by `RUST_LOG`, when it holds a bare level such as `debug`.
pub fn env_level() -> Option<LogLevel> {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| level_from_directive(&value))
}

/// Parse a filter directive that is a bare level. Targeted directives
/// (`storefront=debug`) return `None`.
pub fn level_from_directive(directive: &str) -> Option<LogLevel> {
    directive.trim().parse().ok()
}

/// Install the fmt subscriber writing to stderr.
///
/// `StructuredLogger` drops entries below its own level first, then renders
/// each entry as a complete JSON or human line. The subscriber prints that
/// line untouched: no timestamp, level, target or extra fields. `RUST_LOG`
/// can only narrow what gets printed; set the logger's level with
/// [`env_level`] for a bare `RUST_LOG=debug` to show debug entries.
pub fn init_subscriber(default_level: LogLevel) -> Result<(), SubscriberError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(false)
        .without_time()
        .try_init()
        .map_err(|e| SubscriberError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_error() {
        let _ = init_subscriber(LogLevel::Info);
        let second = init_subscriber(LogLevel::Debug);
        assert!(matches!(second, Err(SubscriberError::AlreadyInitialized(_))));
    }

    #[test]
    fn test_bare_level_directive() {
        assert_eq!(level_from_directive("debug"), Some(LogLevel::Debug));
        assert_eq!(level_from_directive(" TRACE "), Some(LogLevel::Trace));
        assert_eq!(level_from_directive("storefront=debug"), None);
        assert_eq!(level_from_directive(""), None);
    }
}
