/// TMDB metadata provider implementation.
use super::tmdb_types::{DetailsRecord, SearchResponse};
use super::{MetadataRetrievalError, ProviderKind, TvMetadataProvider};
use crate::config::ProviderConfig;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Public TMDB API endpoint used when no proxy is configured.
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Sub-resources requested alongside every details lookup, in request order.
pub const APPEND_TO_RESPONSE: &str = "alternative_titles,credits,images,keywords,content_ratings,recommendations,similar,videos,external_ids,watch/providers,translations";

#[derive(Serialize)]
struct SearchParams<'a> {
    query: &'a str,
    page: u32,
    language: &'a str,
    include_adult: bool,
}

#[derive(Serialize)]
struct DetailsParams<'a> {
    language: &'a str,
    watch_region: &'a str,
    append_to_response: &'a str,
}

/// Metadata provider for the TMDB API.
///
/// Talks to https://api.themoviedb.org/3 directly with a bearer token, or to
/// a local proxy that injects credentials on its own. The HTTP client and
/// its default headers are set up once at construction.
pub struct TmdbProvider {
    client: reqwest::Client,
    base_url: String,
}

impl TmdbProvider {
    /// Creates a provider for the endpoint selected by `config`.
    pub fn new(config: &ProviderConfig) -> Result<Self, MetadataRetrievalError> {
        let base_url = if config.use_proxy {
            config.proxy_base_url.clone()
        } else {
            TMDB_BASE_URL.to_string()
        };
        Self::with_base_url(config, base_url)
    }

    /// Creates a provider that sends its requests to `base_url`.
    ///
    /// Header setup still follows `config`, so this is mostly useful for
    /// pointing the provider at a local test server.
    pub fn with_base_url(
        config: &ProviderConfig,
        base_url: impl Into<String>,
    ) -> Result<Self, MetadataRetrievalError> {
        let headers = Self::default_headers(config)?;
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| MetadataRetrievalError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The endpoint all request paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the headers sent with every request.
    ///
    /// A missing token is not an error: the proxy may supply one, and
    /// unauthenticated calls fail on their own with a 401.
    fn default_headers(config: &ProviderConfig) -> Result<HeaderMap, MetadataRetrievalError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if config.use_proxy {
            return Ok(headers);
        }

        match config.api_token.as_deref() {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(
                    |e| MetadataRetrievalError::Configuration(format!("invalid API token: {}", e)),
                )?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            None if config.run_mode.is_production_like() => {
                tracing::warn!(
                    "TMDB API token is not configured and proxy mode is off; requests will likely fail"
                );
            }
            None => {}
        }

        Ok(headers)
    }

    /// Issues a GET request and decodes the JSON body into `T`.
    async fn get<T, Q>(&self, path: &str, params: &Q) -> Result<T, MetadataRetrievalError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%path, "Sending TMDB request");

        let response = self.client.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetadataRetrievalError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| {
            MetadataRetrievalError::ParseError {
                path: e.path().to_string(),
                source: e.into_inner(),
            }
        })
    }
}

#[async_trait]
impl TvMetadataProvider for TmdbProvider {
    async fn search_by_name(
        &self,
        query: &str,
        page: u32,
        language: &str,
    ) -> Result<SearchResponse, MetadataRetrievalError> {
        let params = SearchParams {
            query,
            page,
            language,
            include_adult: false,
        };
        self.get("/search/tv", &params).await
    }

    async fn get_details_by_id(
        &self,
        id: u64,
        language: &str,
        watch_region: &str,
    ) -> Result<DetailsRecord, MetadataRetrievalError> {
        let params = DetailsParams {
            language,
            watch_region,
            append_to_response: APPEND_TO_RESPONSE,
        };
        self.get(&format!("/tv/{}", id), &params).await
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Remote
    }
}
