use clap::Parser;
use indicatif::MultiProgress;
use lastfm_similar::progress::{hidden_multi_progress, SuspendingWriter};
use lastfm_similar::{ArtistCrawler, Args, CsvExporter, LastFmClient, Runner};
use std::time::Instant;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    let args = Args::parse();

    let multi_progress = if args.no_progress {
        hidden_multi_progress()
    } else {
        MultiProgress::new()
    };

    // Log lines go through the progress bars so they do not overwrite them
    let default_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(Box::new(SuspendingWriter::stderr(
            multi_progress.clone(),
        ))))
        .init();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {e}");
            std::process::exit(1);
        }
    };

    let http_client = http_client::native::NativeClient::new();
    let client = LastFmClient::with_base_url(Box::new(http_client), config.base_url.clone());
    let crawler = ArtistCrawler::with_base_url(client, config.base_url.clone(), config.crawl);
    let runner = Runner::new(crawler, CsvExporter::new(&config.output_dir))
        .deeper(config.deeper)
        .with_progress(multi_progress);

    let summary = match runner.run(&config.artists).await {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("❌ Run failed: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Scraped {} artists ({} skipped, {} failed, {} deeper crawls failed), {} rows written to {:?}",
        summary.scraped,
        summary.skipped,
        summary.failed,
        summary.deeper_failed,
        summary.records_written,
        config.output_dir
    );
    log::info!("Runtime: {:.2} seconds", started.elapsed().as_secs_f64());

    Ok(())
}
