//! HTML parsing for Last.fm similar artists pages.
//!
//! These are pure functions over a parsed [`Html`] document. Fetching pages and
//! following pagination is the crawler's job.

use crate::{LastFmError, Result, SimilarArtist};
use scraper::{ElementRef, Html, Selector};

/// Parser for the `/music/<artist>/+similar` listing.
///
/// Stateless; holds no configuration.
#[derive(Debug, Clone)]
pub struct LastFmParser;

impl LastFmParser {
    /// Create a new parser instance.
    pub fn new() -> Self {
        Self
    }

    /// Extract every similar artist listed on the page.
    ///
    /// Items without a name element (ads, placeholders) are dropped without
    /// being reported. An item that has a name but is otherwise malformed
    /// fails the whole page.
    pub fn parse_similar_artists(&self, document: &Html) -> Result<Vec<SimilarArtist>> {
        let item_selector = Selector::parse("li.similar-artists-item-wrap").unwrap();

        let items: Vec<_> = document.select(&item_selector).collect();
        log::debug!("Found {} similar artist items", items.len());

        let artists = items
            .iter()
            .map(|item| self.parse_similar_artist_item(item))
            .filter_map(Result::transpose)
            .collect::<Result<Vec<_>>>()?;

        if artists.len() < items.len() {
            log::debug!(
                "Skipped {} items without a name element",
                items.len() - artists.len()
            );
        }

        Ok(artists)
    }

    /// Parse a single listing item.
    ///
    /// Returns `Ok(None)` when the item has no name element.
    pub fn parse_similar_artist_item(&self, item: &ElementRef) -> Result<Option<SimilarArtist>> {
        let name_selector = Selector::parse("h3.similar-artists-item-name").unwrap();
        let Some(name_element) = item.select(&name_selector).next() else {
            return Ok(None);
        };

        let link_selector = Selector::parse("a").unwrap();
        let name = name_element
            .select(&link_selector)
            .next()
            .ok_or(LastFmError::Parse("Missing artist name link".to_string()))?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        let listeners_selector = Selector::parse("p.similar-artists-item-listeners").unwrap();
        let listeners_text = item
            .select(&listeners_selector)
            .next()
            .ok_or_else(|| LastFmError::Parse(format!("Missing listener count for '{name}'")))?
            .text()
            .collect::<String>();
        let listeners = clean_listener_count(&listeners_text);

        let tag_selector = Selector::parse("li.tag").unwrap();
        let tags = item
            .select(&tag_selector)
            .map(|tag| tag.text().collect::<String>().trim().to_string())
            .collect();

        Ok(Some(SimilarArtist {
            name,
            listeners,
            tags,
        }))
    }

    /// Find the target of the "next page" control, if there is one.
    ///
    /// A control without a link is reported as a parse error rather than
    /// treated as the last page.
    pub fn parse_next_page_link(&self, document: &Html) -> Result<Option<String>> {
        let next_selector = Selector::parse("li.pagination-next").unwrap();
        let Some(next) = document.select(&next_selector).next() else {
            return Ok(None);
        };

        let link_selector = Selector::parse("a[href]").unwrap();
        let href = next
            .select(&link_selector)
            .next()
            .and_then(|link| link.value().attr("href"))
            .ok_or(LastFmError::Parse(
                "Next page control has no link".to_string(),
            ))?;

        Ok(Some(href.to_string()))
    }
}

impl Default for LastFmParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn text like `"1,234,567 listeners"` into `"1234567"`.
pub fn clean_listener_count(text: &str) -> String {
    text.split_whitespace()
        .next()
        .unwrap_or("")
        .replace(',', "")
}
