//! Startup configuration types.
//!
//! This module defines the configuration consumed at process startup.

use crate::client::DEFAULT_BASE_URL;

/// Configuration for the TUI process.
///
/// Use the builder pattern to customize startup behavior.
///
/// # Example
///
/// ```ignore
/// use hiretrack::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_base_url("http://localhost:9000")
///     .with_log_filter("hiretrack=debug");
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the pipeline backend
    pub base_url: String,
    /// Tracing filter directive (default: "hiretrack=info")
    pub log_filter: String,
    /// Skip the initial data fetch (useful for testing)
    pub skip_initial_fetch: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_filter: "hiretrack=info".to_string(),
            skip_initial_fetch: false,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the tracing filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set whether to skip the initial data fetch.
    pub fn with_skip_initial_fetch(mut self, skip: bool) -> Self {
        self.skip_initial_fetch = skip;
        self
    }

    /// Create config from environment variables.
    ///
    /// `HIRETRACK_API_URL` overrides the backend base URL and
    /// `HIRETRACK_LOG` overrides the tracing filter.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("HIRETRACK_API_URL") {
            config.base_url = url;
        }
        if let Ok(filter) = std::env::var("HIRETRACK_LOG") {
            config.log_filter = filter;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.log_filter, "hiretrack=info");
        assert!(!config.skip_initial_fetch);
    }

    #[test]
    fn test_config_builder() {
        let config = AppConfig::new()
            .with_base_url("http://localhost:9000")
            .with_log_filter("hiretrack=trace")
            .with_skip_initial_fetch(true);

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.log_filter, "hiretrack=trace");
        assert!(config.skip_initial_fetch);
    }
}
