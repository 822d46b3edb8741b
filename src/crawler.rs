//! Pagination-following crawl of one artist's similar artists listing.

use crate::parsing::LastFmParser;
use crate::r#trait::PageFetcher;
use crate::{CrawlOptions, Result, SimilarArtist};
use scraper::Html;

/// Crawls the "similar artists" listing of one artist at a time.
///
/// The crawler is sequential: each page is fetched and parsed before the next
/// request is issued.
///
/// # Pagination
///
/// By default the page that has no "next" control is never scraped, so a
/// listing of N pages yields the artists of pages 1..N-1, and a single-page
/// listing yields nothing. Set [`CrawlOptions::include_last_page`] to scrape
/// every page.
pub struct ArtistCrawler<F: PageFetcher> {
    fetcher: F,
    parser: LastFmParser,
    base_url: String,
    options: CrawlOptions,
}

impl<F: PageFetcher> ArtistCrawler<F> {
    /// Create a crawler against `https://www.last.fm`.
    pub fn new(fetcher: F, options: CrawlOptions) -> Self {
        Self::with_base_url(fetcher, "https://www.last.fm".to_string(), options)
    }

    pub fn with_base_url(fetcher: F, base_url: String, options: CrawlOptions) -> Self {
        Self {
            fetcher,
            parser: LastFmParser::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            options,
        }
    }

    pub fn options(&self) -> CrawlOptions {
        self.options
    }

    /// URL of the first page of `artist`'s similar artists listing.
    pub fn similar_url(&self, artist: &str) -> String {
        format!(
            "{}/music/{}/+similar",
            self.base_url,
            urlencoding::encode(artist)
        )
    }

    /// Crawl `artist`'s similar artists.
    ///
    /// Any fetch or parse failure aborts the crawl; records from pages already
    /// scraped are discarded.
    pub async fn crawl(&self, artist: &str) -> Result<Vec<SimilarArtist>> {
        let listing_url = self.similar_url(artist);
        log::debug!("Crawling similar artists of '{artist}' from {listing_url}");

        let mut document = self.fetch_document(&listing_url).await?;

        if self.options.restricted {
            return self.parser.parse_similar_artists(&document);
        }

        let mut similars = Vec::new();
        while let Some(link) = self.parser.parse_next_page_link(&document)? {
            similars.extend(self.parser.parse_similar_artists(&document)?);
            log::debug!("Total artists number: {}", similars.len());

            let next_url = next_page_url(&listing_url, &link);
            log::debug!("Next page: {next_url}");
            document = self.fetch_document(&next_url).await?;
        }

        if self.options.include_last_page {
            similars.extend(self.parser.parse_similar_artists(&document)?);
        }

        Ok(similars)
    }

    /// Crawl `artist`, logging any failure and returning no artists instead.
    pub async fn crawl_or_empty(&self, artist: &str) -> Vec<SimilarArtist> {
        match self.crawl(artist).await {
            Ok(similars) => similars,
            Err(e) => {
                log::error!("Failed to scrape similar artists of '{artist}': {e}");
                Vec::new()
            }
        }
    }

    async fn fetch_document(&self, url: &str) -> Result<Html> {
        let body = self.fetcher.fetch_page(url).await?;
        Ok(Html::parse_document(&body))
    }
}

/// Build the URL of the next listing page from the next-page link target.
///
/// Last.fm links to the next page with a query fragment such as `?page=2`,
/// which is appended to the listing URL after a `/`. Absolute links are used
/// as they are.
pub fn next_page_url(listing_url: &str, link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        link.to_string()
    } else {
        format!("{listing_url}/{link}")
    }
}
