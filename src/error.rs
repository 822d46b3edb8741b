use thiserror::Error;

/// Error types for similar-artist scraping.
///
/// Crawl failures are split into [`LastFmError::Http`] and [`LastFmError::Parse`]
/// so that a transient network problem can be told apart from Last.fm changing
/// its markup. Neither is retried.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use lastfm_similar::{ArtistCrawler, CrawlOptions, LastFmClient, LastFmError};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let client = LastFmClient::new(Box::new(http_client::native::NativeClient::new()));
///     let crawler = ArtistCrawler::new(client, CrawlOptions::default());
///
///     match crawler.crawl("Daft Punk").await {
///         Ok(similars) => println!("Found {} similar artists", similars.len()),
///         Err(LastFmError::Http(msg)) => eprintln!("Network error: {}", msg),
///         Err(LastFmError::Parse(msg)) => eprintln!("Markup changed? {}", msg),
///         Err(e) => eprintln!("Other error: {}", e),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum LastFmError {
    /// HTTP/network related errors.
    ///
    /// This includes connection failures, non-success status codes and
    /// redirect loops.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse Last.fm's response.
    ///
    /// This happens when an element the scraper relies on is missing, which
    /// usually means Last.fm changed their HTML structure.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid or missing run configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system I/O errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing errors.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl LastFmError {
    /// Whether this error came from the network rather than from the page contents.
    pub fn is_network(&self) -> bool {
        matches!(self, LastFmError::Http(_))
    }
}
