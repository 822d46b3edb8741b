use crate::r#trait::PageFetcher;
use crate::{LastFmError, Result};
use async_trait::async_trait;
use http_client::{HttpClient, Request, Response};
use http_types::{Method, Url};
use std::fs;
use std::path::Path;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";
const MAX_REDIRECTS: u32 = 5;

/// HTTP client for Last.fm's public web pages.
///
/// No login is needed for the similar artists listing, so this client keeps no
/// session state. Requests are plain GETs with browser-like headers; redirects
/// (Last.fm canonicalises artist names that way) are followed by hand.
///
/// # Examples
///
/// ```rust,no_run
/// use lastfm_similar::{LastFmClient, PageFetcher};
///
/// # tokio_test::block_on(async {
/// let client = LastFmClient::new(Box::new(http_client::native::NativeClient::new()));
/// let html = client.fetch_page("https://www.last.fm/music/Daft+Punk/+similar").await?;
/// println!("{} bytes", html.len());
/// # Ok::<(), lastfm_similar::LastFmError>(())
/// # });
/// ```
pub struct LastFmClient {
    client: Box<dyn HttpClient>,
    base_url: String,
    debug_save_responses: bool,
}

impl LastFmClient {
    /// Create a new [`LastFmClient`] with the default Last.fm URL.
    pub fn new(client: Box<dyn HttpClient>) -> Self {
        Self::with_base_url(client, "https://www.last.fm".to_string())
    }

    /// Create a new [`LastFmClient`] with a custom base URL.
    ///
    /// This is useful for testing or if Last.fm changes their domain.
    pub fn with_base_url(client: Box<dyn HttpClient>, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            debug_save_responses: std::env::var("LASTFM_SIMILAR_DEBUG_SAVE_RESPONSES").is_ok(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an HTTP GET request, following redirects.
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.get_with_redirects(url, 0).await
    }

    async fn get_with_redirects(&self, url: &str, redirect_count: u32) -> Result<Response> {
        if redirect_count > MAX_REDIRECTS {
            return Err(LastFmError::Http("Too many redirects".to_string()));
        }

        let parsed_url = url
            .parse::<Url>()
            .map_err(|e| LastFmError::Http(format!("Invalid URL '{url}': {e}")))?;
        let mut request = Request::new(Method::Get, parsed_url);
        request.insert_header("User-Agent", USER_AGENT);
        request.insert_header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8");
        request.insert_header("Accept-Language", "en-US,en;q=0.9");
        request.insert_header("DNT", "1");
        request.insert_header("Connection", "keep-alive");
        request.insert_header("Upgrade-Insecure-Requests", "1");

        let response = self
            .client
            .send(request)
            .await
            .map_err(|e| LastFmError::Http(e.to_string()))?;

        if response.status().is_redirection() {
            if let Some(location) = response.header("location") {
                if let Some(redirect_url) = location.get(0) {
                    let full_redirect_url = self.resolve_redirect(url, redirect_url.as_str());
                    log::debug!("Following redirect from {url} to {full_redirect_url}");

                    return Box::pin(
                        self.get_with_redirects(&full_redirect_url, redirect_count + 1),
                    )
                    .await;
                }
            }
        }

        if !response.status().is_success() {
            return Err(LastFmError::Http(format!(
                "GET {url} returned status {}",
                response.status()
            )));
        }

        Ok(response)
    }

    fn resolve_redirect(&self, url: &str, location: &str) -> String {
        if location.starts_with("http") {
            location.to_string()
        } else if location.starts_with('/') {
            format!("{}{location}", self.base_url)
        } else {
            // Relative to current path
            let parent = url.rsplit_once('/').map(|(head, _)| head).unwrap_or(url);
            format!("{parent}/{location}")
        }
    }

    /// Extract response body, optionally saving debug info
    async fn extract_response_body(&self, url: &str, response: &mut Response) -> Result<String> {
        let body = response
            .body_string()
            .await
            .map_err(|e| LastFmError::Http(e.to_string()))?;

        log::debug!(
            "GET {url}: {} status, {} chars",
            response.status(),
            body.len()
        );

        if self.debug_save_responses {
            self.save_debug_response(url, response.status().into(), &body);
        }

        Ok(body)
    }

    /// Save response to debug directory (optional debug feature)
    fn save_debug_response(&self, url: &str, status_code: u16, body: &str) {
        if let Err(e) = self.try_save_debug_response(url, status_code, body) {
            log::warn!("Failed to save debug response: {e}");
        }
    }

    fn try_save_debug_response(&self, url: &str, status_code: u16, body: &str) -> Result<()> {
        let debug_dir = Path::new("debug_responses");
        fs::create_dir_all(debug_dir)?;

        let url_path = url.strip_prefix(&self.base_url).unwrap_or(url);

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S_%3f");
        let safe_path = url_path.replace(['/', '?', '&', '=', '%', '+'], "_");

        let filename = format!("{timestamp}_{safe_path}_status{status_code}.html");
        let file_path = debug_dir.join(filename);
        fs::write(&file_path, body)?;

        log::debug!(
            "Saved HTTP response to {file_path:?} (status: {status_code}, url: {url_path})"
        );

        Ok(())
    }
}

#[async_trait(?Send)]
impl PageFetcher for LastFmClient {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let mut response = self.get(url).await?;
        self.extract_response_body(url, &mut response).await
    }
}
