use crate::Result;
use async_trait::async_trait;

/// Source of listing pages for the crawler.
///
/// The production implementation is [`LastFmClient`](crate::LastFmClient).
/// Tests substitute fixtures so the crawl loop can run without a network.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides `MockPageFetcher`
/// that implements this trait using the `mockall` library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait PageFetcher {
    /// GET `url` and return the response body.
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

#[async_trait(?Send)]
impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        (**self).fetch_page(url).await
    }
}
