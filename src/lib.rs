//! tv_lookup - TV show search and details lookup
//!
//! This library wraps the TMDB TV search and details endpoints behind the
//! [`TvMetadataProvider`] trait. A fixture-backed mock implements the same
//! trait for test and demo runs, and [`ProviderSelector`] picks one of the
//! two from a [`ProviderConfig`] and shares it with all callers.
//!
//! # Examples
//!
//! ```no_run
//! use tv_lookup::{ProviderSelector, TvMetadataProvider};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let selector = ProviderSelector::from_env()?;
//! let tmdb = selector.provider()?;
//!
//! let found = tmdb.search_by_name("The Expanse", 1, "en-US").await?;
//! if let Some(show) = found.results.first() {
//!     let details = tmdb.get_details_by_id(show.id, "en-US", "US").await?;
//!     println!("{} ({} seasons)", details.name, details.number_of_seasons);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod metadata_retrieval;
mod selector;

pub use config::{ConfigError, DEFAULT_PROXY_BASE_URL, ProviderConfig, RunMode};
pub use metadata_retrieval::*;
pub use selector::{ProviderSelector, SharedProvider};
