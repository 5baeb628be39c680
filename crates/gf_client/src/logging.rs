use tracing::Level;
use std::sync::Once;
use std::collections::VecDeque;

static INIT: Once = Once::new();

/// Prefixes every message with the tags it was built with, e.g. `[guardian]`.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    prefixes: VecDeque<String>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            prefixes: VecDeque::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push_back(prefix.into());
        self
    }

    fn prefixed(&self, message: &str) -> String {
        let prefix = self.prefixes.iter().map(|p| format!("{} ", p)).collect::<String>();
        format!("{}{}", prefix, message)
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}", self.prefixed(message));
    }

    pub fn error(&self, message: &str) {
        tracing::error!("{}", self.prefixed(message));
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!("{}", self.prefixed(message));
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{}", self.prefixed(message));
    }
}

/// Installs the stderr subscriber once. Later calls, or calls after another
/// subscriber was set, only hand back a fresh logger.
pub fn init_logging(verbose: bool) -> Logger {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            let level = if verbose { Level::DEBUG } else { Level::INFO };
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .try_init();
        });
    }
    Logger::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_are_joined_in_order() {
        let logger = Logger::new().with_prefix("[guardian]").with_prefix("[load]");
        assert_eq!(logger.prefixed("done"), "[guardian] [load] done");
        assert_eq!(Logger::new().prefixed("plain"), "plain");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(false);
        init_logging(true).info("second init is a no-op");
    }
}
