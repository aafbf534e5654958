//! Fixture-backed metadata provider
//!
//! Used in test and demo runs where no network access or API token is
//! available. All data is static; nothing is ever fetched.

use super::tmdb_types::{
    CastMember, ContentRating, Credits, DetailsRecord, EpisodeToAir, ExternalIds, Genre,
    ResultList, SearchResponse, SearchResult, SeasonSummary, WatchAvailability, WatchProvider,
    WatchProviders,
};
use super::{DEFAULT_LANGUAGE, MetadataRetrievalError, ProviderKind, TvMetadataProvider};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Display name returned for the default locale.
const LOCALIZED_NAME: &str = "凡人修仙传";

/// Display name returned for every other locale.
const FALLBACK_NAME: &str = "A Record of a Mortal's Journey to Immortality";

/// Metadata provider returning canned data.
///
/// Search filters a fixed list of two series by name. Details always
/// describe the same series, echoing back the requested id.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockTmdbProvider;

impl MockTmdbProvider {
    /// Creates a new mock provider.
    pub fn new() -> Self {
        Self
    }

    /// The fixture entries search runs against, in result order.
    fn seed() -> Vec<SearchResult> {
        vec![
            SearchResult {
                adult: false,
                id: 243224,
                name: "凡人修仙传".to_string(),
                original_name: "凡人修仙传".to_string(),
                original_language: "zh".to_string(),
                overview: "一个凡人修仙的故事。".to_string(),
                first_air_date: Some("2020-07-25".to_string()),
                poster_path: None,
                backdrop_path: None,
                popularity: 10.0,
                genre_ids: vec![16, 10765],
                origin_country: vec!["CN".to_string()],
                vote_average: 8.6,
                vote_count: 1000,
            },
            SearchResult {
                adult: false,
                id: 83095,
                name: "The Expanse".to_string(),
                original_name: "The Expanse".to_string(),
                original_language: "en".to_string(),
                overview: "A thriller set two hundred years in the future.".to_string(),
                first_air_date: Some("2015-12-14".to_string()),
                poster_path: None,
                backdrop_path: None,
                popularity: 20.0,
                genre_ids: vec![18, 10765],
                origin_country: vec!["US".to_string()],
                vote_average: 8.5,
                vote_count: 5000,
            },
        ]
    }

    /// Builds the static details fixture for `id`.
    fn details_fixture(id: u64, language: &str, watch_region: &str) -> DetailsRecord {
        let name = if language == DEFAULT_LANGUAGE {
            LOCALIZED_NAME
        } else {
            FALLBACK_NAME
        };

        let mut regions = BTreeMap::new();
        regions.insert(
            watch_region.to_string(),
            WatchAvailability {
                link: format!(
                    "https://www.themoviedb.org/tv/{}/watch?locale={}",
                    id, watch_region
                ),
                flatrate: vec![WatchProvider {
                    provider_id: 283,
                    provider_name: "Crunchyroll".to_string(),
                    logo_path: Some("/fzN5Jok5Ig1eJ7gyNGoMhnLSCfh.jpg".to_string()),
                    display_priority: 7,
                }],
                rent: Vec::new(),
                buy: Vec::new(),
                ads: Vec::new(),
                free: Vec::new(),
            },
        );

        DetailsRecord {
            id,
            name: name.to_string(),
            original_name: LOCALIZED_NAME.to_string(),
            original_language: "zh".to_string(),
            overview: "一个凡人修仙的故事。".to_string(),
            adult: false,
            backdrop_path: None,
            poster_path: None,
            homepage: String::new(),
            tagline: String::new(),
            status: "Returning Series".to_string(),
            kind: "Scripted".to_string(),
            in_production: true,
            first_air_date: Some("2020-07-25".to_string()),
            last_air_date: Some("2025-08-16".to_string()),
            last_episode_to_air: None,
            next_episode_to_air: Some(EpisodeToAir {
                id: 999,
                name: "Next".to_string(),
                overview: String::new(),
                air_date: Some("2025-08-23".to_string()),
                episode_number: 160,
                episode_type: "standard".to_string(),
                production_code: String::new(),
                runtime: Some(20),
                season_number: 1,
                show_id: id,
                still_path: None,
            }),
            number_of_seasons: 1,
            number_of_episodes: 160,
            episode_run_time: vec![20],
            languages: vec!["zh".to_string()],
            origin_country: vec!["CN".to_string()],
            popularity: 10.0,
            vote_average: 8.6,
            vote_count: 1000,
            genres: vec![
                Genre {
                    id: 16,
                    name: "动画".to_string(),
                },
                Genre {
                    id: 10765,
                    name: "Sci-Fi & Fantasy".to_string(),
                },
            ],
            created_by: Vec::new(),
            networks: Vec::new(),
            production_companies: Vec::new(),
            production_countries: Vec::new(),
            seasons: vec![SeasonSummary {
                id: 155_000,
                name: "第 1 季".to_string(),
                overview: String::new(),
                air_date: Some("2020-07-25".to_string()),
                episode_count: 160,
                poster_path: None,
                season_number: 1,
                vote_average: 8.6,
            }],
            spoken_languages: Vec::new(),
            alternative_titles: Some(ResultList {
                results: Vec::new(),
            }),
            credits: Some(Credits {
                cast: vec![CastMember {
                    id: 1,
                    name: "钱文青".to_string(),
                    original_name: "钱文青".to_string(),
                    character: "韩立".to_string(),
                    profile_path: None,
                    order: 0,
                }],
                crew: Vec::new(),
            }),
            images: None,
            keywords: None,
            content_ratings: Some(ResultList {
                results: vec![ContentRating {
                    iso_3166_1: "CN".to_string(),
                    rating: "12".to_string(),
                    descriptors: Vec::new(),
                }],
            }),
            recommendations: None,
            similar: None,
            videos: None,
            external_ids: Some(ExternalIds {
                wikidata_id: Some("Q96614738".to_string()),
                ..ExternalIds::default()
            }),
            watch_providers: Some(WatchProviders { results: regions }),
            translations: None,
        }
    }
}

#[async_trait]
impl TvMetadataProvider for MockTmdbProvider {
    async fn search_by_name(
        &self,
        query: &str,
        page: u32,
        _language: &str,
    ) -> Result<SearchResponse, MetadataRetrievalError> {
        let needle = query.to_lowercase();
        let results: Vec<SearchResult> = Self::seed()
            .into_iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect();

        // Fixtures fit on a single page
        Ok(SearchResponse {
            page,
            total_pages: 1,
            total_results: results.len() as u32,
            results,
        })
    }

    async fn get_details_by_id(
        &self,
        id: u64,
        language: &str,
        watch_region: &str,
    ) -> Result<DetailsRecord, MetadataRetrievalError> {
        Ok(Self::details_fixture(id, language, watch_region))
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Mock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_matches_single_entry() {
        let provider = MockTmdbProvider::new();
        let response = provider.search("凡人").await.unwrap();

        assert_eq!(response.page, 1);
        assert_eq!(response.total_pages, 1);
        assert_eq!(response.total_results, 1);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id, 243224);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let provider = MockTmdbProvider::new();
        let response = provider.search_by_name("eXpAnSe", 1, "en-US").await.unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id, 83095);
    }

    #[tokio::test]
    async fn test_search_only_returns_matching_names() {
        let provider = MockTmdbProvider::new();
        for query in ["e", "THE", "仙", "x"] {
            let response = provider.search(query).await.unwrap();
            let needle = query.to_lowercase();
            assert!(
                response
                    .results
                    .iter()
                    .all(|r| r.name.to_lowercase().contains(&needle)),
                "unexpected match for {:?}",
                query
            );
            assert_eq!(response.total_results as usize, response.results.len());
        }
    }

    #[tokio::test]
    async fn test_search_preserves_fixture_order() {
        let provider = MockTmdbProvider::new();
        // Empty query matches everything
        let response = provider.search("").await.unwrap();
        let ids: Vec<u64> = response.results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![243224, 83095]);
    }

    #[tokio::test]
    async fn test_search_without_matches_is_empty() {
        let provider = MockTmdbProvider::new();
        let response = provider.search_by_name("no such show", 3, "zh-CN").await.unwrap();

        assert!(response.results.is_empty());
        assert_eq!(response.total_results, 0);
        assert_eq!(response.total_pages, 1);
        assert_eq!(response.page, 3);
    }

    #[tokio::test]
    async fn test_details_localized_name() {
        let provider = MockTmdbProvider::new();

        let zh = provider.get_details_by_id(123, "zh-CN", "CN").await.unwrap();
        assert_eq!(zh.id, 123);
        assert_eq!(zh.name, LOCALIZED_NAME);

        let en = provider.get_details_by_id(123, "en-US", "US").await.unwrap();
        assert_eq!(en.id, 123);
        assert_eq!(en.name, FALLBACK_NAME);
        assert_ne!(zh.name, en.name);
    }

    #[tokio::test]
    async fn test_details_templates_watch_link() {
        let provider = MockTmdbProvider::new();
        let details = provider.details(42).await.unwrap();

        let regions = details.watch_providers.unwrap().results;
        let cn = regions.get("CN").unwrap();
        assert_eq!(cn.link, "https://www.themoviedb.org/tv/42/watch?locale=CN");
        assert_eq!(details.next_episode_to_air.unwrap().show_id, 42);
    }
}
