//! Catalog loader
//!
//! Parses the delimited catalog format, one video per line:
//!
//! ```text
//! Amazing Cats | amazing_cats_video_id | #cat,#animal
//! ```
//!
//! Fields are `|`-separated and whitespace-trimmed; the tag field is
//! optional and itself comma-separated with per-tag trimming. Malformed
//! lines are skipped with a warning rather than aborting the load.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tube_core::{Video, VideoId};

/// Parse one catalog line. Returns `None` for blank or malformed lines.
fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|');
    let title = fields.next()?.trim();
    let id = fields.next()?.trim();
    if title.is_empty() || id.is_empty() {
        return None;
    }
    let tags = match fields.next() {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ToOwned::to_owned)
            .collect(),
        None => Vec::new(),
    };
    Some(Video::new(VideoId::new(id), title, tags))
}

/// Read a catalog from any line-oriented source.
///
/// Returns every well-formed entry in input order; later duplicates of an
/// id win when the result is handed to the catalog.
pub fn read_catalog<R: BufRead>(reader: R) -> io::Result<Vec<Video>> {
    let mut videos = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some(video) => videos.push(video),
            None => tracing::warn!(line = number + 1, "skipping malformed catalog line"),
        }
    }
    Ok(videos)
}

/// Read a catalog file from disk.
pub fn read_catalog_file(path: &Path) -> io::Result<Vec<Video>> {
    let file = File::open(path)?;
    read_catalog(BufReader::new(file))
}

/// Parse a catalog from an in-memory string (used for bundled catalogs).
pub fn read_catalog_str(content: &str) -> Vec<Video> {
    // reading from a string cannot fail
    read_catalog(content.as_bytes()).unwrap_or_default()
}
