//! Data types for similar artist listings.

/// An artist listed on another artist's "similar artists" page.
///
/// `listeners` is kept as text: thousands separators are stripped but the value
/// is not parsed, so whatever Last.fm prints ends up in the export.
///
/// # Examples
///
/// ```rust
/// use lastfm_similar::SimilarArtist;
///
/// let artist = SimilarArtist {
///     name: "Justice".to_string(),
///     listeners: "1834223".to_string(),
///     tags: vec!["electronic".to_string(), "french house".to_string()],
/// };
///
/// assert_eq!(artist.tag_field(), "electronic,french house");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimilarArtist {
    /// The artist name, as shown in the listing link
    pub name: String,
    /// Listener count with separators removed, e.g. `"1234567"`
    pub listeners: String,
    /// Tag texts in document order
    pub tags: Vec<String>,
}

impl SimilarArtist {
    /// All tags joined with commas. Empty when the artist has no tags.
    pub fn tag_field(&self) -> String {
        self.tags.join(",")
    }
}

/// Options controlling how far a single artist crawl goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Only scrape the first listing page.
    pub restricted: bool,
    /// Also scrape the last page of a paginated listing.
    ///
    /// Off by default: historically the page without a "next" link was never
    /// scraped, and existing exports were produced that way.
    pub include_last_page: bool,
}

/// Totals reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Seed artists whose output file was written
    pub scraped: usize,
    /// Seed artists skipped because their output file already existed
    pub skipped: usize,
    /// Seed artists whose crawl failed (an empty file is still written)
    pub failed: usize,
    /// Crawls of similar artists during a deeper run that failed
    pub deeper_failed: usize,
    /// Rows written across all output files
    pub records_written: usize,
}
