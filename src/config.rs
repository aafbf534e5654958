//! Provider configuration
//!
//! Settings are collected once at startup into a [`ProviderConfig`] and never
//! change afterwards. They can be built explicitly or read from the process
//! environment.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Proxy endpoint used when proxy mode is on and no URL is configured.
pub const DEFAULT_PROXY_BASE_URL: &str = "http://127.0.0.1:8080/backend/tmdb";

/// Errors that can occur while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Proxy mode is on but the proxy URL cannot serve as a request base
    #[error("Proxy URL '{0}' must be an absolute http(s) URL")]
    InvalidProxyUrl(String),
}

/// The mode the host application runs in
///
/// Mode names other than the four known ones are kept as [`RunMode::Other`]
/// and treated like production.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Live deployment
    Production,
    /// Local development against the real API
    #[default]
    Development,
    /// Automated test runs
    Test,
    /// Offline demonstration
    Demo,
    /// Any other mode name, e.g. `staging`
    Other(String),
}

impl RunMode {
    /// Whether this mode should warn about a missing API credential
    pub fn is_production_like(&self) -> bool {
        !matches!(self, RunMode::Development)
    }

    /// Whether this mode always runs against fixture data
    pub fn uses_fixtures(&self) -> bool {
        matches!(self, RunMode::Test | RunMode::Demo)
    }
}

impl From<&str> for RunMode {
    fn from(s: &str) -> Self {
        let name = s.trim();
        match name.to_ascii_lowercase().as_str() {
            "production" | "prod" => RunMode::Production,
            "development" | "dev" => RunMode::Development,
            "test" => RunMode::Test,
            "demo" => RunMode::Demo,
            _ => RunMode::Other(name.to_string()),
        }
    }
}

impl FromStr for RunMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RunMode::from(s))
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunMode::Production => "production",
            RunMode::Development => "development",
            RunMode::Test => "test",
            RunMode::Demo => "demo",
            RunMode::Other(name) => name,
        };
        f.write_str(name)
    }
}

/// Settings consumed when a provider is selected and constructed
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Route requests through the local proxy instead of the public API
    pub use_proxy: bool,
    /// Bearer token for the public API
    pub api_token: Option<String>,
    /// Force the mock provider regardless of run mode
    pub mock_enabled: bool,
    /// Mode of the host application
    pub run_mode: RunMode,
    /// Base URL of the local proxy, used only when `use_proxy` is set
    pub proxy_base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            use_proxy: false,
            api_token: None,
            mock_enabled: false,
            run_mode: RunMode::default(),
            proxy_base_url: DEFAULT_PROXY_BASE_URL.to_string(),
        }
    }
}

// The token must never end up in logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("use_proxy", &self.use_proxy)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("mock_enabled", &self.mock_enabled)
            .field("run_mode", &self.run_mode)
            .field("proxy_base_url", &self.proxy_base_url)
            .finish()
    }
}

impl ProviderConfig {
    /// Reads the configuration from the process environment
    ///
    /// Recognized variables are `TMDB_PROXY`, `TMDB_API_TOKEN`,
    /// `USE_MOCK_TMDB`, `TMDB_RUN_MODE` and `TMDB_PROXY_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    ///
    /// Flags are enabled only by the exact string `true`. An empty token is
    /// treated as absent. With proxy mode on, the proxy URL must be absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use tv_lookup::{ProviderConfig, RunMode};
    ///
    /// let config = ProviderConfig::from_lookup(|key| match key {
    ///     "TMDB_RUN_MODE" => Some("demo".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.run_mode, RunMode::Demo);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).is_some_and(|value| value == "true");

        let run_mode = lookup("TMDB_RUN_MODE")
            .map(|mode| RunMode::from(mode.as_str()))
            .unwrap_or_default();

        let config = Self {
            use_proxy: flag("TMDB_PROXY"),
            api_token: lookup("TMDB_API_TOKEN").filter(|token| !token.is_empty()),
            mock_enabled: flag("USE_MOCK_TMDB"),
            run_mode,
            proxy_base_url: lookup("TMDB_PROXY_URL")
                .unwrap_or_else(|| DEFAULT_PROXY_BASE_URL.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks settings that would make every request fail
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.use_proxy {
            return Ok(());
        }

        match reqwest::Url::parse(&self.proxy_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            _ => Err(ConfigError::InvalidProxyUrl(self.proxy_base_url.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_run_mode_parsing() {
        assert_eq!(RunMode::from("production"), RunMode::Production);
        assert_eq!(RunMode::from("PROD"), RunMode::Production);
        assert_eq!(RunMode::from("dev"), RunMode::Development);
        assert_eq!(RunMode::from(" Test "), RunMode::Test);
        assert_eq!("demo".parse(), Ok(RunMode::Demo));
        assert_eq!(
            RunMode::from(" staging "),
            RunMode::Other("staging".to_string())
        );
        assert_eq!(RunMode::Other("staging".to_string()).to_string(), "staging");
    }

    #[test]
    fn test_only_development_skips_token_warning() {
        assert!(!RunMode::Development.is_production_like());
        assert!(RunMode::Production.is_production_like());
        assert!(RunMode::Other("staging".to_string()).is_production_like());
        assert!(!RunMode::Other("staging".to_string()).uses_fixtures());
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ProviderConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ProviderConfig::default());
        assert_eq!(config.run_mode, RunMode::Development);
        assert_eq!(config.proxy_base_url, DEFAULT_PROXY_BASE_URL);
    }

    #[test]
    fn test_from_lookup_reads_all_fields() {
        let config = ProviderConfig::from_lookup(lookup_from(&[
            ("TMDB_PROXY", "true"),
            ("TMDB_API_TOKEN", "FAKE_TOKEN"),
            ("USE_MOCK_TMDB", "true"),
            ("TMDB_RUN_MODE", "production"),
            ("TMDB_PROXY_URL", "http://localhost:3000/tmdb"),
        ]))
        .unwrap();

        assert!(config.use_proxy);
        assert_eq!(config.api_token.as_deref(), Some("FAKE_TOKEN"));
        assert!(config.mock_enabled);
        assert_eq!(config.run_mode, RunMode::Production);
        assert_eq!(config.proxy_base_url, "http://localhost:3000/tmdb");
    }

    #[test]
    fn test_flags_require_exact_true() {
        let config = ProviderConfig::from_lookup(lookup_from(&[
            ("TMDB_PROXY", "1"),
            ("USE_MOCK_TMDB", "TRUE"),
            ("TMDB_API_TOKEN", ""),
        ]))
        .unwrap();

        assert!(!config.use_proxy);
        assert!(!config.mock_enabled);
        assert_eq!(config.api_token, None);
    }

    #[test]
    fn test_unknown_run_mode_is_kept() {
        let config = ProviderConfig::from_lookup(lookup_from(&[
            ("TMDB_RUN_MODE", "staging"),
            ("TMDB_API_TOKEN", "FAKE_TOKEN"),
        ]))
        .unwrap();
        assert_eq!(config.run_mode, RunMode::Other("staging".to_string()));
    }

    #[test]
    fn test_relative_proxy_url_is_rejected() {
        let result = ProviderConfig::from_lookup(lookup_from(&[
            ("TMDB_PROXY", "true"),
            ("TMDB_PROXY_URL", "/backend/tmdb"),
        ]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidProxyUrl("/backend/tmdb".to_string()))
        );
    }

    #[test]
    fn test_proxy_url_ignored_without_proxy_mode() {
        let config = ProviderConfig::from_lookup(lookup_from(&[(
            "TMDB_PROXY_URL",
            "/backend/tmdb",
        )]))
        .unwrap();
        assert!(!config.use_proxy);
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ProviderConfig {
            api_token: Some("SECRET".to_string()),
            ..ProviderConfig::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("SECRET"));
        assert!(debug.contains("<redacted>"));
    }
}
