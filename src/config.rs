//! Runtime Configuration
//!
//! The only knob is the log level, taken from the page query string
//! (`index.html?log=debug`).

use log::LevelFilter;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Parse a query string such as `?log=debug&x=1`. Unknown values fall back to defaults.
    pub fn from_query(query: &str) -> Self {
        let log_level = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "log")
            .and_then(|(_, value)| value.parse::<LevelFilter>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self { log_level }
    }

    /// Recent log lines are shown on the page at debug verbosity or above
    pub fn show_log_panel(&self) -> bool {
        self.log_level >= LevelFilter::Debug
    }

    /// Read the configuration from `window.location.search`
    pub fn from_location() -> Self {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .map(|query| Self::from_query(&query))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(AppConfig::from_query("").log_level, LevelFilter::Info);
    }

    #[test]
    fn test_log_param() {
        assert_eq!(AppConfig::from_query("?log=debug").log_level, LevelFilter::Debug);
        assert_eq!(AppConfig::from_query("?a=1&log=off").log_level, LevelFilter::Off);
    }

    #[test]
    fn test_log_panel_only_when_debugging() {
        assert!(!AppConfig::from_query("").show_log_panel());
        assert!(!AppConfig::from_query("?log=warn").show_log_panel());
        assert!(AppConfig::from_query("?log=debug").show_log_panel());
        assert!(AppConfig::from_query("?log=trace").show_log_panel());
    }

    #[test]
    fn test_bad_value_falls_back() {
        assert_eq!(AppConfig::from_query("?log=loud").log_level, LevelFilter::Info);
    }
}
