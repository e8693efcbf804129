use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Debug logger writing to stderr, so stdout stays a clean report.
pub struct Logger {
    debug: bool,
}

impl Logger {
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| Logger { debug });
    }

    /// Logging before `init` is a no-op.
    pub fn enabled() -> bool {
        LOGGER.get().map(|logger| logger.debug).unwrap_or(false)
    }

    pub fn debug_fmt(args: std::fmt::Arguments) {
        if Self::enabled() {
            eprintln!("[debug] {args}");
        }
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::core::logger::Logger::debug_fmt(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_debug_enabled() {
        Logger::init(true);
        crate::debug_log!("Formatted: {}", "test");
        assert!(Logger::enabled());
    }
}
