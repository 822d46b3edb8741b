//! Command line arguments and the run configuration derived from them.

use crate::{CrawlOptions, LastFmError, Result};
use clap::Parser;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Scrape Last.fm's similar artists pages into per-artist CSV files.
#[derive(Parser, Debug, Clone)]
#[command(name = "lastfm-similar", version, about, long_about = None)]
pub struct Args {
    /// Display debugging information
    #[arg(long)]
    pub debug: bool,

    /// Artists to scrape (separated by comma)
    #[arg(short, long)]
    pub artists: Option<String>,

    /// CSV file listing artists in its first column, typically a previous export
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Deepen the crawl: also get the similar artists of the similar artists
    #[arg(short, long)]
    pub deeper: bool,

    /// Only scrape the first page of similar artists
    #[arg(short, long)]
    pub restricted: bool,

    /// Also scrape the last page of the listing, which is skipped by default
    #[arg(long)]
    pub include_last_page: bool,

    /// Directory the CSV exports are written to
    #[arg(short, long, value_name = "DIR", default_value = "Exports")]
    pub output_dir: PathBuf,

    /// Last.fm base URL
    #[arg(long, default_value = "https://www.last.fm")]
    pub base_url: String,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Everything a run needs, with the seed artist list already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub artists: Vec<String>,
    pub deeper: bool,
    pub crawl: CrawlOptions,
    pub output_dir: PathBuf,
    pub base_url: String,
}

impl Args {
    /// Resolve the seed artists and build the run configuration.
    ///
    /// Fails when neither `--artists` nor `--input` is given, or when the input
    /// file cannot be read.
    pub fn into_config(self) -> Result<ScrapeConfig> {
        let artists = match (&self.input, &self.artists) {
            (Some(input), inline) => {
                if inline.is_some() {
                    log::warn!("Both --artists and --input given, using {input:?}");
                }
                let file = File::open(input).map_err(|e| {
                    LastFmError::Config(format!("Cannot open input file {input:?}: {e}"))
                })?;
                read_artists_csv(file)?
            }
            (None, Some(inline)) => split_artist_list(inline),
            (None, None) => {
                return Err(LastFmError::Config(
                    "Use the -a flag or the -i flag to input artists to scrape.".to_string(),
                ))
            }
        };

        Ok(ScrapeConfig {
            artists,
            deeper: self.deeper,
            crawl: CrawlOptions {
                restricted: self.restricted,
                include_last_page: self.include_last_page,
            },
            output_dir: self.output_dir,
            base_url: self.base_url,
        })
    }
}

/// Split a comma-separated artist list, trimming names and dropping empty ones.
pub fn split_artist_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|artist| !artist.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read seed artists from the first column of a header-less CSV.
///
/// Rows may have any width, so an export of this tool can be fed back in.
/// Names are trimmed and rows with an empty first column are dropped, like
/// [`split_artist_list`] does for the inline list.
pub fn read_artists_csv<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut artists = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        match record.get(0).map(str::trim) {
            Some(artist) if !artist.is_empty() => artists.push(artist.to_string()),
            _ => log::debug!("Skipping input row without an artist: {record:?}"),
        }
    }

    Ok(artists)
}
