#[cfg(feature = "mock")]
mod mock_tests {
    use lastfm_similar::{ArtistCrawler, CrawlOptions, LastFmError, MockPageFetcher};
    use mockall::predicate::*;

    const LISTING: &str = "https://www.last.fm/music/Air/+similar";

    #[tokio::test]
    async fn test_mock_restricted_crawl() {
        let mut mock_fetcher = MockPageFetcher::new();
        mock_fetcher
            .expect_fetch_page()
            .with(eq(LISTING))
            .times(1)
            .returning(|_| {
                Ok(r#"<li class="similar-artists-item-wrap">
                        <h3 class="similar-artists-item-name"><a href="/music/Phoenix">Phoenix</a></h3>
                        <p class="similar-artists-item-listeners">1,200,000 listeners</p>
                        <ul><li class="tag">indie</li></ul>
                      </li>
                      <li class="pagination-next"><a href="?page=2">Next</a></li>"#
                    .to_string())
            });

        let options = CrawlOptions {
            restricted: true,
            ..Default::default()
        };
        let crawler = ArtistCrawler::new(mock_fetcher, options);
        let similars = crawler.crawl("Air").await.unwrap();

        assert_eq!(similars.len(), 1);
        assert_eq!(similars[0].name, "Phoenix");
        assert_eq!(similars[0].listeners, "1200000");
        assert_eq!(similars[0].tags, vec!["indie"]);
    }

    #[tokio::test]
    async fn test_mock_network_failure() {
        let mut mock_fetcher = MockPageFetcher::new();
        mock_fetcher
            .expect_fetch_page()
            .times(1)
            .returning(|_| Err(LastFmError::Http("timed out".to_string())));

        let crawler = ArtistCrawler::new(mock_fetcher, CrawlOptions::default());
        assert!(crawler.crawl_or_empty("Air").await.is_empty());
    }
}
