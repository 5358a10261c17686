use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};

/// Browser console logger - infrastructure implementation of the domain
/// `Logger` abstraction.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    /// Verbose logger for development builds.
    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Warn)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }

        let timestamp = get_time_provider().format_timestamp(entry.timestamp);
        let formatted =
            format!("[{}] {} {}: {}", timestamp, entry.level, entry.component, entry.message);

        match entry.level {
            LogLevel::Error => gloo::console::error!(formatted),
            LogLevel::Warn => gloo::console::warn!(formatted),
            _ => gloo::console::log!(formatted),
        }
    }
}

/// Millisecond clock backed by the browser's `Date.now()`.
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        // HH:MM:SS.mmm from the UTC day fraction
        let millis = timestamp % 1000;
        let seconds_of_day = (timestamp / 1000) % 86_400;
        let hours = seconds_of_day / 3600;
        let minutes = (seconds_of_day % 3600) / 60;
        let seconds = seconds_of_day % 60;
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
    }
}
