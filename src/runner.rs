//! Seed artist loop: skip, crawl, expand, export.

use crate::crawler::ArtistCrawler;
use crate::export::CsvExporter;
use crate::r#trait::PageFetcher;
use crate::progress::{create_progress_bar, hidden_multi_progress};
use crate::{Result, RunSummary, SimilarArtist};
use indicatif::MultiProgress;

/// Drives a whole run over a list of seed artists.
///
/// Scrape failures are contained per seed artist: they are logged, counted and
/// an empty export is written. Only output errors end the run early.
///
/// The per-seed bar and the per-deeper-crawl bar are both added to one
/// [`MultiProgress`]. Pass the same instance to the logger's
/// [`SuspendingWriter`](crate::progress::SuspendingWriter) so log lines do not
/// break the bars.
pub struct Runner<F: PageFetcher> {
    crawler: ArtistCrawler<F>,
    exporter: CsvExporter,
    deeper: bool,
    multi_progress: MultiProgress,
}

impl<F: PageFetcher> Runner<F> {
    pub fn new(crawler: ArtistCrawler<F>, exporter: CsvExporter) -> Self {
        Self {
            crawler,
            exporter,
            deeper: false,
            multi_progress: hidden_multi_progress(),
        }
    }

    /// Also crawl every similar artist found for a seed, one level deep.
    pub fn deeper(mut self, deeper: bool) -> Self {
        self.deeper = deeper;
        self
    }

    /// Draw progress bars through `multi_progress`. Bars are hidden otherwise.
    pub fn with_progress(mut self, multi_progress: MultiProgress) -> Self {
        self.multi_progress = multi_progress;
        self
    }

    pub async fn run(&self, artists: &[String]) -> Result<RunSummary> {
        self.exporter.ensure_output_dir()?;

        let mut summary = RunSummary::default();
        let progress = create_progress_bar(&self.multi_progress, artists.len() as u64, "artists");

        for artist in artists {
            progress.set_message(artist.clone());

            if self.exporter.exists(artist) {
                log::debug!(
                    "Skipping '{artist}', {:?} already exists",
                    self.exporter.output_path(artist)
                );
                summary.skipped += 1;
                progress.inc(1);
                continue;
            }

            let mut similars = match self.crawler.crawl(artist).await {
                Ok(similars) => similars,
                Err(e) => {
                    log::error!("Failed to scrape similar artists of '{artist}': {e}");
                    summary.failed += 1;
                    Vec::new()
                }
            };

            if self.deeper {
                let deeper = self.crawl_deeper(artist, &similars, &mut summary).await;
                similars.extend(deeper);
            }

            summary.records_written += self.exporter.write(artist, &similars)?;
            summary.scraped += 1;
            progress.inc(1);
        }

        progress.finish_and_clear();
        self.multi_progress.remove(&progress);
        Ok(summary)
    }

    async fn crawl_deeper(
        &self,
        artist: &str,
        similars: &[SimilarArtist],
        summary: &mut RunSummary,
    ) -> Vec<SimilarArtist> {
        log::info!("Scraping similar artists of the similar artists of '{artist}'");
        let progress =
            create_progress_bar(&self.multi_progress, similars.len() as u64, "similar artists");

        let mut deeper = Vec::new();
        for similar in similars {
            progress.set_message(similar.name.clone());
            match self.crawler.crawl(&similar.name).await {
                Ok(found) => deeper.extend(found),
                Err(e) => {
                    log::error!(
                        "Failed to scrape similar artists of '{}' (via '{artist}'): {e}",
                        similar.name
                    );
                    summary.deeper_failed += 1;
                }
            }
            progress.inc(1);
        }

        progress.finish_and_clear();
        self.multi_progress.remove(&progress);
        deeper
    }
}
