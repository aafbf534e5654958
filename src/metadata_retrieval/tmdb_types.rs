/// TMDB TV response types.
///
/// These structures mirror the JSON bodies returned by the `/search/tv` and
/// `/tv/{id}` endpoints. Both providers hand them out unchanged.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single match from the TV search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Whether the series is flagged as adult content
    #[serde(default)]
    pub adult: bool,
    /// TMDB series identifier
    pub id: u64,
    /// Display name in the requested language
    pub name: String,
    /// Name in the original language
    pub original_name: String,
    /// ISO 639-1 code of the original language
    pub original_language: String,
    /// Plot summary in the requested language
    pub overview: String,
    /// First air date as `YYYY-MM-DD`, absent for unreleased shows
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Poster image path relative to the TMDB image base
    pub poster_path: Option<String>,
    /// Backdrop image path relative to the TMDB image base
    pub backdrop_path: Option<String>,
    /// TMDB popularity score
    pub popularity: f64,
    /// Identifiers of the genres the series belongs to
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    /// ISO 3166-1 codes of the countries of origin
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Average user rating from 0 to 10
    pub vote_average: f64,
    /// Number of user ratings
    pub vote_count: u64,
}

/// Pagination envelope around a page of search results.
///
/// Also used for the `recommendations` and `similar` sub-sections of a
/// details record, where TMDB sometimes leaves out the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Page number of this response, starting at 1
    pub page: u32,
    /// Number of pages available for the query
    #[serde(default)]
    pub total_pages: u32,
    /// Number of matches across all pages
    #[serde(default)]
    pub total_results: u32,
    /// Matches on this page, in ranking order
    pub results: Vec<SearchResult>,
}

/// Full description of one TV series, optionally with appended sub-sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailsRecord {
    /// TMDB series identifier
    pub id: u64,
    /// Display name in the requested language
    pub name: String,
    /// Name in the original language
    pub original_name: String,
    /// ISO 639-1 code of the original language
    pub original_language: String,
    /// Plot summary in the requested language
    pub overview: String,
    /// Whether the series is flagged as adult content
    #[serde(default)]
    pub adult: bool,
    /// Backdrop image path
    pub backdrop_path: Option<String>,
    /// Poster image path
    pub poster_path: Option<String>,
    /// Official homepage, empty when unknown
    #[serde(default)]
    pub homepage: String,
    /// Short tagline, empty when unknown
    #[serde(default)]
    pub tagline: String,
    /// Production status such as `Returning Series` or `Ended`
    pub status: String,
    /// Series type such as `Scripted` or `Documentary`
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether new episodes are still being produced
    #[serde(default)]
    pub in_production: bool,
    /// Air date of the first episode
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Air date of the most recent episode
    #[serde(default)]
    pub last_air_date: Option<String>,
    /// The most recently aired episode
    #[serde(default)]
    pub last_episode_to_air: Option<EpisodeToAir>,
    /// The next scheduled episode, if one is announced
    #[serde(default)]
    pub next_episode_to_air: Option<EpisodeToAir>,
    /// Number of seasons, specials excluded
    pub number_of_seasons: u32,
    /// Number of episodes across all seasons
    pub number_of_episodes: u32,
    /// Typical episode runtimes in minutes
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    /// ISO 639-1 codes of the spoken languages
    #[serde(default)]
    pub languages: Vec<String>,
    /// ISO 3166-1 codes of the countries of origin
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// TMDB popularity score
    pub popularity: f64,
    /// Average user rating from 0 to 10
    pub vote_average: f64,
    /// Number of user ratings
    pub vote_count: u64,
    /// Genres with localized names
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Creators of the series
    #[serde(default)]
    pub created_by: Vec<Creator>,
    /// Broadcasting networks
    #[serde(default)]
    pub networks: Vec<Company>,
    /// Companies involved in production
    #[serde(default)]
    pub production_companies: Vec<Company>,
    /// Countries involved in production
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    /// Summaries of all seasons, specials included
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
    /// Languages spoken in the series
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,

    // Sub-sections requested through `append_to_response`. Each one is only
    // present when the provider returned it.
    /// Titles used in other countries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_titles: Option<ResultList<AlternativeTitle>>,
    /// Cast and crew
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
    /// Backdrops, logos and posters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Images>,
    /// Keywords attached to the series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<ResultList<Keyword>>,
    /// Age ratings per country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_ratings: Option<ResultList<ContentRating>>,
    /// Series TMDB recommends to viewers of this one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<SearchResponse>,
    /// Series with similar genres and keywords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similar: Option<SearchResponse>,
    /// Trailers, teasers and clips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<ResultList<Video>>,
    /// Identifiers on other sites
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// Streaming availability per region
    #[serde(
        rename = "watch/providers",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub watch_providers: Option<WatchProviders>,
    /// Localized names and overviews
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<Translations>,
}

/// Generic `{ "results": [...] }` wrapper used by several sub-sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultList<T> {
    /// The wrapped entries
    pub results: Vec<T>,
}

/// The last aired or next scheduled episode of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeToAir {
    /// TMDB episode identifier
    pub id: u64,
    /// Episode title
    pub name: String,
    /// Episode summary
    #[serde(default)]
    pub overview: String,
    /// Air date as `YYYY-MM-DD`
    pub air_date: Option<String>,
    /// Episode number within the season
    pub episode_number: u32,
    /// Episode type such as `standard` or `finale`
    #[serde(default)]
    pub episode_type: String,
    /// Production code, usually empty
    #[serde(default)]
    pub production_code: String,
    /// Runtime in minutes
    pub runtime: Option<u32>,
    /// Season the episode belongs to
    pub season_number: u32,
    /// Identifier of the series
    pub show_id: u64,
    /// Still image path
    pub still_path: Option<String>,
}

/// A genre with its localized name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    /// TMDB genre identifier
    pub id: u64,
    /// Localized genre name
    pub name: String,
}

/// A person credited with creating the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    /// TMDB person identifier
    pub id: u64,
    /// Person name
    pub name: String,
    /// Profile image path
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// A network or production company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// TMDB company identifier
    pub id: u64,
    /// Company name
    pub name: String,
    /// Logo image path
    #[serde(default)]
    pub logo_path: Option<String>,
    /// ISO 3166-1 code of the home country
    #[serde(default)]
    pub origin_country: String,
}

/// A country involved in production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCountry {
    /// ISO 3166-1 country code
    pub iso_3166_1: String,
    /// Country name
    pub name: String,
}

/// A language spoken in the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    /// ISO 639-1 language code
    pub iso_639_1: String,
    /// Native language name
    pub name: String,
    /// English language name
    #[serde(default)]
    pub english_name: String,
}

/// Summary of one season as listed in the details record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    /// TMDB season identifier
    pub id: u64,
    /// Season title
    pub name: String,
    /// Season summary
    #[serde(default)]
    pub overview: String,
    /// Air date of the first episode in the season
    pub air_date: Option<String>,
    /// Number of episodes in the season
    pub episode_count: u32,
    /// Season poster path
    pub poster_path: Option<String>,
    /// Season number (0 for specials)
    pub season_number: u32,
    /// Average user rating of the season
    #[serde(default)]
    pub vote_average: f64,
}

/// A title the series is known by in some country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeTitle {
    /// ISO 3166-1 country code
    pub iso_3166_1: String,
    /// The alternative title
    pub title: String,
    /// Kind of title, e.g. `romaji`, often empty
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Cast and crew of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    /// Actors, in billing order
    #[serde(default)]
    pub cast: Vec<CastMember>,
    /// People working behind the camera
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// An actor appearing in the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    /// TMDB person identifier
    pub id: u64,
    /// Person name
    pub name: String,
    /// Name in the original language
    #[serde(default)]
    pub original_name: String,
    /// Character played
    #[serde(default)]
    pub character: String,
    /// Profile image path
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Billing position, 0 first
    #[serde(default)]
    pub order: u32,
}

/// A crew member of the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    /// TMDB person identifier
    pub id: u64,
    /// Person name
    pub name: String,
    /// Department such as `Directing` or `Writing`
    #[serde(default)]
    pub department: String,
    /// Job title within the department
    #[serde(default)]
    pub job: String,
    /// Profile image path
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Image collections of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Images {
    /// Wide background images
    #[serde(default)]
    pub backdrops: Vec<Image>,
    /// Title logos
    #[serde(default)]
    pub logos: Vec<Image>,
    /// Poster images
    #[serde(default)]
    pub posters: Vec<Image>,
}

/// A single image file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Path relative to the TMDB image base
    pub file_path: String,
    /// Width divided by height
    pub aspect_ratio: f64,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Language of any text in the image
    #[serde(default)]
    pub iso_639_1: Option<String>,
    /// Average user rating of the image
    #[serde(default)]
    pub vote_average: f64,
    /// Number of user ratings
    #[serde(default)]
    pub vote_count: u64,
}

/// A keyword attached to the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// TMDB keyword identifier
    pub id: u64,
    /// Keyword text
    pub name: String,
}

/// Age rating of a series in one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRating {
    /// ISO 3166-1 country code
    pub iso_3166_1: String,
    /// Rating label such as `TV-14`
    pub rating: String,
    /// Content descriptors accompanying the rating
    #[serde(default)]
    pub descriptors: Vec<String>,
}

/// A video hosted on an external site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// TMDB video identifier
    pub id: String,
    /// Key of the video on the hosting site
    pub key: String,
    /// Video title
    pub name: String,
    /// Hosting site such as `YouTube`
    pub site: String,
    /// Video type such as `Trailer` or `Teaser`
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the video was published by the rights holder
    #[serde(default)]
    pub official: bool,
    /// ISO 639-1 language code
    #[serde(default)]
    pub iso_639_1: String,
    /// ISO 3166-1 country code
    #[serde(default)]
    pub iso_3166_1: String,
    /// Publication timestamp
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Identifiers of the series on other sites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalIds {
    /// IMDb title identifier
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Freebase machine identifier
    #[serde(default)]
    pub freebase_mid: Option<String>,
    /// Freebase identifier
    #[serde(default)]
    pub freebase_id: Option<String>,
    /// TheTVDB series identifier
    #[serde(default)]
    pub tvdb_id: Option<u64>,
    /// TVRage series identifier
    #[serde(default)]
    pub tvrage_id: Option<u64>,
    /// Wikidata entity identifier
    #[serde(default)]
    pub wikidata_id: Option<String>,
    /// Facebook page name
    #[serde(default)]
    pub facebook_id: Option<String>,
    /// Instagram account name
    #[serde(default)]
    pub instagram_id: Option<String>,
    /// Twitter account name
    #[serde(default)]
    pub twitter_id: Option<String>,
}

/// Streaming availability keyed by ISO 3166-1 region code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchProviders {
    /// Availability per region
    pub results: BTreeMap<String, WatchAvailability>,
}

/// Where the series can be watched in one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchAvailability {
    /// TMDB page listing all offers for the region
    pub link: String,
    /// Subscription services
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flatrate: Vec<WatchProvider>,
    /// Rental offers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rent: Vec<WatchProvider>,
    /// Purchase offers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buy: Vec<WatchProvider>,
    /// Ad-supported services
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ads: Vec<WatchProvider>,
    /// Free services
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub free: Vec<WatchProvider>,
}

/// A streaming or retail service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchProvider {
    /// TMDB provider identifier
    pub provider_id: u64,
    /// Service name
    pub provider_name: String,
    /// Logo image path
    pub logo_path: Option<String>,
    /// Sort position in listings, lower first
    #[serde(default)]
    pub display_priority: u32,
}

/// All translations of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translations {
    /// One entry per language and region
    pub translations: Vec<Translation>,
}

/// Localized name and overview of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    /// ISO 3166-1 country code
    pub iso_3166_1: String,
    /// ISO 639-1 language code
    pub iso_639_1: String,
    /// Native language name
    pub name: String,
    /// English language name
    #[serde(default)]
    pub english_name: String,
    /// The translated fields
    pub data: TranslationData,
}

/// Translated fields of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationData {
    /// Translated name
    #[serde(default)]
    pub name: String,
    /// Translated overview
    #[serde(default)]
    pub overview: String,
    /// Localized homepage
    #[serde(default)]
    pub homepage: String,
    /// Translated tagline
    #[serde(default)]
    pub tagline: String,
}
