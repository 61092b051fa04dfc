use super::BookMerger;
use crate::error::PipelineError;
use crate::record::RawRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Load and merge a line-delimited JSON file.
///
/// The first unreadable or malformed line aborts the whole load; no partial
/// results are returned.
pub fn load_books(path: &Path) -> Result<BookMerger, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::InputAccess {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "loading records");
    let merger = load_from_reader(BufReader::new(file))?;

    let stats = merger.stats();
    info!(
        records = stats.records_read,
        untitled = stats.skipped_untitled,
        titles = stats.distinct_titles,
        "records merged"
    );

    Ok(merger)
}

/// Merge records from any buffered source, one JSON object per line
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<BookMerger, PipelineError> {
    let mut merger = BookMerger::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| PipelineError::InputRead {
            line: line_number,
            source,
        })?;

        let record = RawRecord::from_json_line(&line).map_err(|source| {
            PipelineError::MalformedRecord {
                line: line_number,
                source,
            }
        })?;

        merger.ingest(record);
    }

    Ok(merger)
}
