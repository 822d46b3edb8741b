//! Scraper for Last.fm's "similar artists" pages.
//!
//! Given seed artists, the crate follows the paginated
//! `/music/<artist>/+similar` listing, extracts each similar artist's name,
//! listener count and tags, and writes one CSV file per seed artist.

pub mod client;
pub mod config;
pub mod crawler;
pub mod error;
pub mod export;
pub mod parsing;
pub mod progress;
pub mod runner;
pub mod r#trait;
pub mod types;

pub use client::LastFmClient;
pub use config::{Args, ScrapeConfig};
pub use crawler::ArtistCrawler;
pub use error::LastFmError;
pub use export::CsvExporter;
pub use parsing::LastFmParser;
pub use r#trait::PageFetcher;
pub use runner::Runner;
pub use types::{CrawlOptions, RunSummary, SimilarArtist};

#[cfg(feature = "mock")]
pub use r#trait::MockPageFetcher;

// Re-export scraper types for testing
pub use scraper::Html;

pub type Result<T> = std::result::Result<T, LastFmError>;
