//! The row filter pass.
//!
//! Copies the header record unchanged, then streams every data record whose
//! label field is not the no-face sentinel. Records are handled as raw bytes so
//! the comparison is an exact string match and field contents pass through
//! untouched.

use std::{
    io::{BufRead, Write},
    path::Path,
    time::Duration,
};

use csv::ByteRecord;
use log::{debug, info};

use crate::{
    error::{FilterError, Result},
    io_utils,
};

/// Zero-based index of the expression label column.
pub const LABEL_FIELD: usize = 7;

/// Label value marking an image with no detectable face.
pub const SENTINEL: &[u8] = b"-2";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub rows_read: u64,
    pub rows_written: u64,
    pub rows_dropped: u64,
}

pub fn is_retained(record: &ByteRecord) -> Result<bool> {
    let line = record.position().map(|pos| pos.line()).unwrap_or(0);
    label_kept(record, line)
}

fn label_kept(record: &ByteRecord, line: u64) -> Result<bool> {
    match record.get(LABEL_FIELD) {
        Some(label) => Ok(label != SENTINEL),
        None => Err(malformed(line, record.len())),
    }
}

fn malformed(line: u64, fields: usize) -> FilterError {
    FilterError::MalformedRow {
        line,
        fields,
        required: LABEL_FIELD + 1,
    }
}

/// Follows the reader's line counter from one record to the next.
///
/// The csv reader skips blank lines without yielding a record, so a blank
/// line only shows up as an extra newline consumed ahead of the next record.
/// A record ended by `\r\n` is returned at the `\r`; its `\n` is consumed by
/// the following read, which `crlf` accounts for.
struct LineTracker {
    line: u64,
    crlf: bool,
}

impl LineTracker {
    fn after_header(headers: &ByteRecord, line: u64) -> Self {
        Self {
            line,
            crlf: line == 1 + embedded_newlines(headers),
        }
    }

    fn carry(&self) -> u64 {
        u64::from(self.crlf)
    }

    /// Returns the line the record starts on, or the first blank line
    /// skipped ahead of it.
    fn advance(&mut self, record: &ByteRecord, line: u64) -> std::result::Result<u64, u64> {
        let consumed = line.saturating_sub(self.line);
        let blanks = consumed.saturating_sub(1 + embedded_newlines(record));
        let first = self.line + self.carry();
        self.line = line;
        if blanks > 0 { Err(first) } else { Ok(first) }
    }

    /// Returns the first blank line left after the last record, if any.
    fn finish(&self, line: u64) -> Option<u64> {
        let blanks = line.saturating_sub(self.line).saturating_sub(self.carry());
        (blanks > 0).then(|| self.line + self.carry())
    }
}

fn embedded_newlines(record: &ByteRecord) -> u64 {
    record.as_slice().iter().filter(|&&byte| byte == b'\n').count() as u64
}

/// Runs the pass over a reader that has not been read from yet.
///
/// A leading UTF-8 byte order mark is kept as part of the first header field.
/// Blank lines after the header abort the pass like any other row without a
/// label field.
pub fn filter_records<R, W>(
    reader: &mut csv::Reader<R>,
    writer: &mut csv::Writer<W>,
) -> Result<FilterSummary>
where
    R: BufRead,
    W: Write,
{
    let has_bom = io_utils::take_utf8_bom(reader.get_mut())?;
    let mut headers = reader.byte_headers()?.clone();
    if headers.is_empty() {
        return Err(FilterError::MissingHeader);
    }
    if has_bom {
        headers = io_utils::with_utf8_bom(&headers);
    }
    writer.write_byte_record(&headers)?;

    let mut lines = LineTracker::after_header(&headers, reader.position().line());
    let mut summary = FilterSummary::default();
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        let line = lines
            .advance(&record, reader.position().line())
            .map_err(|blank| malformed(blank, 0))?;
        summary.rows_read += 1;
        if label_kept(&record, line)? {
            writer.write_byte_record(&record)?;
            summary.rows_written += 1;
        } else {
            summary.rows_dropped += 1;
            debug!("Dropping no-face row on line {line}");
        }
    }
    if let Some(blank) = lines.finish(reader.position().line()) {
        return Err(malformed(blank, 0));
    }
    writer.flush()?;
    Ok(summary)
}

pub fn filter_file(input: &Path, output: &Path) -> Result<FilterSummary> {
    info!("Filtering '{}' -> '{}'", input.display(), output.display());
    let mut reader = io_utils::open_csv_reader_from_path(input)?;
    let mut writer = io_utils::open_csv_writer_to_path(output)?;
    let summary = filter_records(&mut reader, &mut writer)?;
    info!(
        "Kept {} of {} data row(s), dropped {}",
        summary.rows_written, summary.rows_read, summary.rows_dropped
    );
    Ok(summary)
}

/// Whole minutes elapsed, rounded down.
pub fn elapsed_minutes(elapsed: Duration) -> u64 {
    elapsed.as_secs() / 60
}
