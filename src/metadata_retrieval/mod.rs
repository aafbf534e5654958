/// Provider contract for TV show metadata lookup.
///
/// This module defines the operations every metadata backend supports
/// (search by name, details by id) together with the error type they share.
/// Two backends are available: the remote TMDB API and an in-memory mock.
mod mock;
mod tmdb;
mod tmdb_types;

pub use mock::MockTmdbProvider;
pub use tmdb::{APPEND_TO_RESPONSE, TMDB_BASE_URL, TmdbProvider};
pub use tmdb_types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Language tag used when the caller does not ask for one.
pub const DEFAULT_LANGUAGE: &str = "zh-CN";

/// Region used for watch-provider availability when none is given.
pub const DEFAULT_WATCH_REGION: &str = "CN";

/// First page of search results.
pub const DEFAULT_PAGE: u32 = 1;

/// Errors that can occur during metadata retrieval operations.
#[derive(Debug, Error)]
pub enum MetadataRetrievalError {
    /// The HTTP client could not be set up
    #[error("Invalid provider configuration: {0}")]
    Configuration(String),

    /// Request to the metadata provider failed
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Failed to parse the provider's JSON response
    #[error("Failed to parse API response at {path}: {source}")]
    ParseError {
        path: String,
        source: serde_json::Error,
    },
}

/// The backend a provider talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// The real TMDB API, directly or through a proxy
    Remote,
    /// Fixed in-memory fixture data
    Mock,
}

/// Trait for metadata providers that can search and describe TV series.
///
/// Implementors hold no mutable state, so one instance can be shared
/// across tasks behind an `Arc`.
#[async_trait]
pub trait TvMetadataProvider: Send + Sync {
    /// Searches TV series by name.
    ///
    /// # Arguments
    ///
    /// * `query` - Search keywords
    /// * `page` - Page number, starting at 1
    /// * `language` - Locale tag for the returned names, e.g. `zh-CN`
    ///
    /// # Returns
    ///
    /// The requested page of matches. A query that matches nothing yields an
    /// empty result list, not an error.
    async fn search_by_name(
        &self,
        query: &str,
        page: u32,
        language: &str,
    ) -> Result<SearchResponse, MetadataRetrievalError>;

    /// Fetches the full record of one TV series.
    ///
    /// # Arguments
    ///
    /// * `id` - TMDB series identifier
    /// * `language` - Locale tag for localized fields
    /// * `watch_region` - Region used for watch-provider availability
    async fn get_details_by_id(
        &self,
        id: u64,
        language: &str,
        watch_region: &str,
    ) -> Result<DetailsRecord, MetadataRetrievalError>;

    /// Which backend this provider is.
    fn kind(&self) -> ProviderKind;

    /// Searches the first page using the default language.
    async fn search(&self, query: &str) -> Result<SearchResponse, MetadataRetrievalError> {
        self.search_by_name(query, DEFAULT_PAGE, DEFAULT_LANGUAGE)
            .await
    }

    /// Fetches details using the default language and watch region.
    async fn details(&self, id: u64) -> Result<DetailsRecord, MetadataRetrievalError> {
        self.get_details_by_id(id, DEFAULT_LANGUAGE, DEFAULT_WATCH_REGION)
            .await
    }
}
