//! Configuration for spell lookups.

use std::time::Duration;

/// Spell page used when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.aidedd.org/dnd/sorts.php?vo=";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "HB_SPELL_URL";
/// Environment variable overriding the timeout, in seconds.
pub const TIMEOUT_ENV: &str = "HB_LOOKUP_TIMEOUT_SECS";

/// Where and how long to look for spell pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// URL prefix; the hyphenated spell name is appended to it.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl LookupConfig {
    /// Defaults overridden by `HB_SPELL_URL` and `HB_LOOKUP_TIMEOUT_SECS`.
    ///
    /// Unparseable or blank values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Some(secs) = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }

    /// Set the base URL. A blank URL keeps the current one.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.trim().is_empty() {
            self.base_url = url.trim().to_string();
        }
        self
    }

    /// Set the request timeout (at least one second).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.max(Duration::from_secs(1));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = LookupConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, Duration::from_secs(10));
    }

    #[test]
    fn builder_methods() {
        let cfg = LookupConfig::default()
            .with_base_url("http://localhost:8080/spell?name=")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(cfg.base_url, "http://localhost:8080/spell?name=");
        assert_eq!(cfg.timeout, Duration::from_secs(3));
    }

    #[test]
    fn blank_url_and_zero_timeout() {
        let cfg = LookupConfig::default()
            .with_base_url("  ")
            .with_timeout(Duration::ZERO);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, Duration::from_secs(1));
    }
}
