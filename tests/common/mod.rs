#![allow(dead_code)]
use async_trait::async_trait;
use lastfm_similar::{LastFmError, PageFetcher, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;

pub const BASE_URL: &str = "https://www.last.fm";
pub const DAFT_PUNK_URL: &str = "https://www.last.fm/music/Daft%20Punk/+similar";

pub fn fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{name}"))
        .unwrap_or_else(|e| panic!("Could not read test fixture {name}: {e}"))
}

/// Serves canned pages by URL and records every request made.
///
/// Unknown URLs answer with an HTTP error, like a 404 would.
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
    failing: Vec<String>,
    requests: RefCell<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: String) -> Self {
        self.pages.insert(url.to_string(), body);
        self
    }

    pub fn with_failure(mut self, url: &str) -> Self {
        self.failing.push(url.to_string());
        self
    }

    /// The three-page Daft Punk listing.
    pub fn daft_punk() -> Self {
        Self::new()
            .with_page(DAFT_PUNK_URL, fixture("daft_punk_similar_page_1.html"))
            .with_page(
                &format!("{DAFT_PUNK_URL}/?page=2"),
                fixture("daft_punk_similar_page_2.html"),
            )
            .with_page(
                &format!("{DAFT_PUNK_URL}/?page=3"),
                fixture("daft_punk_similar_page_3.html"),
            )
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PageFetcher for FixtureFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());

        if self.failing.iter().any(|failing| failing == url) {
            return Err(LastFmError::Http(format!("connection reset: {url}")));
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| LastFmError::Http(format!("GET {url} returned status 404")))
    }
}

/// A listing page with a single artist and no further pages.
pub fn single_artist_page(name: &str, listeners: &str) -> String {
    format!(
        r#"<html><body><ol class="similar-artists">
             <li class="similar-artists-item-wrap">
               <h3 class="similar-artists-item-name"><a href="/music/{name}">{name}</a></h3>
               <p class="similar-artists-item-listeners">{listeners} listeners</p>
             </li>
           </ol></body></html>"#
    )
}
