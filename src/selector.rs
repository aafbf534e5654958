//! Provider selection
//!
//! Decides once, from the configuration, whether callers talk to the remote
//! TMDB API or to the fixture-backed mock, and hands every caller the same
//! provider instance.

use crate::config::ProviderConfig;
use crate::metadata_retrieval::{
    MetadataRetrievalError, MockTmdbProvider, ProviderKind, TmdbProvider, TvMetadataProvider,
};
use std::sync::{Arc, OnceLock};

/// Handle to the provider shared by all callers.
pub type SharedProvider = Arc<dyn TvMetadataProvider>;

impl ProviderKind {
    /// Picks the provider kind the configuration asks for.
    ///
    /// The mock is used when it is explicitly enabled or when the run mode
    /// is a fixture mode (test, demo). Everything else goes to the remote API.
    pub fn for_config(config: &ProviderConfig) -> Self {
        if config.mock_enabled || config.run_mode.uses_fixtures() {
            ProviderKind::Mock
        } else {
            ProviderKind::Remote
        }
    }
}

/// Owns the one provider instance of an application.
///
/// Create it once at startup and pass it (or the [`SharedProvider`] it
/// returns) to whoever needs metadata. The provider is built on first
/// access; later accesses return the same instance.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tv_lookup::{ProviderConfig, ProviderKind, ProviderSelector, TvMetadataProvider};
///
/// let selector = ProviderSelector::new(ProviderConfig {
///     mock_enabled: true,
///     ..ProviderConfig::default()
/// });
/// let first = selector.provider().unwrap();
/// let second = selector.provider().unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(first.kind(), ProviderKind::Mock);
/// ```
pub struct ProviderSelector {
    config: ProviderConfig,
    kind: ProviderKind,
    provider: OnceLock<SharedProvider>,
}

impl ProviderSelector {
    /// Creates a selector for the given configuration.
    pub fn new(config: ProviderConfig) -> Self {
        let kind = ProviderKind::for_config(&config);
        tracing::debug!(?kind, run_mode = %config.run_mode, "Selected metadata provider");
        Self {
            config,
            kind,
            provider: OnceLock::new(),
        }
    }

    /// Creates a selector from the process environment.
    ///
    /// See [`ProviderConfig::from_env`] for the recognized variables.
    pub fn from_env() -> Result<Self, crate::ConfigError> {
        Ok(Self::new(ProviderConfig::from_env()?))
    }

    /// The kind of provider this selector hands out.
    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// The configuration the selector was created with.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Returns the shared provider, building it on first access.
    ///
    /// If several threads race on the first access each may build a
    /// candidate, but only the first one stored is ever handed out. A failed
    /// build leaves nothing stored, so the next call tries again.
    pub fn provider(&self) -> Result<SharedProvider, MetadataRetrievalError> {
        if let Some(provider) = self.provider.get() {
            return Ok(Arc::clone(provider));
        }

        let candidate = self.build()?;
        Ok(Arc::clone(self.provider.get_or_init(|| candidate)))
    }

    fn build(&self) -> Result<SharedProvider, MetadataRetrievalError> {
        let provider: SharedProvider = match self.kind {
            ProviderKind::Mock => Arc::new(MockTmdbProvider::new()),
            ProviderKind::Remote => Arc::new(TmdbProvider::new(&self.config)?),
        };
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunMode;
    use std::thread;

    fn config(mock_enabled: bool, run_mode: RunMode) -> ProviderConfig {
        ProviderConfig {
            mock_enabled,
            run_mode,
            api_token: Some("FAKE_TOKEN".to_string()),
            ..ProviderConfig::default()
        }
    }

    #[test]
    fn test_kind_selection() {
        assert_eq!(
            ProviderKind::for_config(&config(true, RunMode::Production)),
            ProviderKind::Mock
        );
        assert_eq!(
            ProviderKind::for_config(&config(false, RunMode::Test)),
            ProviderKind::Mock
        );
        assert_eq!(
            ProviderKind::for_config(&config(false, RunMode::Demo)),
            ProviderKind::Mock
        );
        assert_eq!(
            ProviderKind::for_config(&config(false, RunMode::Development)),
            ProviderKind::Remote
        );
        assert_eq!(
            ProviderKind::for_config(&config(false, RunMode::Production)),
            ProviderKind::Remote
        );
        assert_eq!(
            ProviderKind::for_config(&config(false, RunMode::Other("staging".to_string()))),
            ProviderKind::Remote
        );
        assert_eq!(
            ProviderKind::for_config(&config(true, RunMode::Other("staging".to_string()))),
            ProviderKind::Mock
        );
    }

    #[test]
    fn test_mock_provider_is_shared() {
        let selector = ProviderSelector::new(config(false, RunMode::Test));
        let first = selector.provider().unwrap();
        let second = selector.provider().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.kind(), ProviderKind::Mock);
    }

    #[test]
    fn test_remote_provider_is_shared() {
        let selector = ProviderSelector::new(config(false, RunMode::Production));
        let first = selector.provider().unwrap();
        let second = selector.provider().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.kind(), ProviderKind::Remote);
        assert_eq!(selector.kind(), ProviderKind::Remote);
    }

    #[test]
    fn test_concurrent_first_access_yields_one_instance() {
        let selector = ProviderSelector::new(config(false, RunMode::Development));

        let providers: Vec<SharedProvider> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| selector.provider().unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let first = &providers[0];
        assert!(providers.iter().all(|p| Arc::ptr_eq(first, p)));
    }

    #[test]
    fn test_failed_build_is_not_cached() {
        let selector = ProviderSelector::new(ProviderConfig {
            api_token: Some("bad\ntoken".to_string()),
            ..ProviderConfig::default()
        });

        assert!(selector.provider().is_err());
        assert!(selector.provider().is_err());
    }

    #[tokio::test]
    async fn test_test_mode_serves_fixtures() {
        let selector = ProviderSelector::new(config(false, RunMode::Test));
        let provider = selector.provider().unwrap();
        let response = provider.search("凡人").await.unwrap();

        assert_eq!(response.page, 1);
        assert_eq!(response.results[0].id, 243224);
    }
}
