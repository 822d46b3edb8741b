//! Per-artist CSV exports.

use crate::{Result, SimilarArtist};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const FILE_SUFFIX: &str = "_similar-artists.csv";

/// Writes one CSV file per seed artist into an output directory.
///
/// Rows are `name,listeners,tag1,tag2,...` with one column per tag, so the
/// row width varies. Files are never overwritten: an existing file marks the
/// artist as done.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory if it does not exist yet.
    pub fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Path of the export for `artist`.
    pub fn output_path(&self, artist: &str) -> PathBuf {
        let safe_name = artist.replace(['/', '\\'], "_");
        self.output_dir.join(format!("{safe_name}{FILE_SUFFIX}"))
    }

    pub fn exists(&self, artist: &str) -> bool {
        self.output_path(artist).is_file()
    }

    /// Write `artist`'s export, returning the number of rows written.
    ///
    /// An empty `similars` still creates an (empty) file.
    pub fn write(&self, artist: &str, similars: &[SimilarArtist]) -> Result<usize> {
        let path = self.output_path(artist);
        let file = fs::File::create(&path)?;
        let rows = write_records(file, similars)?;
        log::debug!("Wrote {rows} rows to {path:?}");
        Ok(rows)
    }
}

/// Serialize `similars` as CSV rows without a header.
pub fn write_records<W: Write>(writer: W, similars: &[SimilarArtist]) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    for artist in similars {
        let mut record = vec![artist.name.as_str(), artist.listeners.as_str()];
        record.extend(artist.tags.iter().map(String::as_str));
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;

    Ok(similars.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(name: &str, listeners: &str, tags: &[&str]) -> SimilarArtist {
        SimilarArtist {
            name: name.to_string(),
            listeners: listeners.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_one_column_per_tag() {
        let mut out = Vec::new();
        let rows = write_records(
            &mut out,
            &[
                artist("Justice", "1834223", &["electronic", "french house"]),
                artist("Air", "2000", &[]),
            ],
        )
        .unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Justice,1834223,electronic,french house\nAir,2000\n"
        );
    }

    #[test]
    fn test_tag_with_comma_is_quoted() {
        let mut out = Vec::new();
        write_records(&mut out, &[artist("Air", "1", &["chill, lounge"])]).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Air,1,\"chill, lounge\"\n");
    }

    #[test]
    fn test_output_path_replaces_separators() {
        let exporter = CsvExporter::new("Exports");
        assert_eq!(
            exporter.output_path("AC/DC"),
            PathBuf::from("Exports/AC_DC_similar-artists.csv")
        );
    }

    #[test]
    fn test_write_creates_empty_file_for_no_results() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path());

        assert!(!exporter.exists("Nobody"));
        assert_eq!(exporter.write("Nobody", &[]).unwrap(), 0);
        assert!(exporter.exists("Nobody"));
        assert_eq!(
            fs::read_to_string(exporter.output_path("Nobody")).unwrap(),
            ""
        );
    }
}
