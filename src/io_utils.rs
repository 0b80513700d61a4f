//! CSV reader and writer construction.
//!
//! Both sides use the comma delimiter and double-quote escaping. Readers and
//! writers are flexible: records may differ in length from the header, so rows
//! are copied with exactly the fields they were read with. Output records end
//! in `\r\n`.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};

use csv::{ByteRecord, QuoteStyle, Terminator};

use crate::error::{FilterError, Result};

pub const CSV_DELIMITER: u8 = b',';
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn open_csv_reader<R>(reader: R) -> csv::Reader<R>
where
    R: Read,
{
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .delimiter(CSV_DELIMITER)
        .double_quote(true)
        .flexible(true);
    builder.from_reader(reader)
}

pub fn open_csv_reader_from_path(path: &Path) -> Result<csv::Reader<BufReader<File>>> {
    let file = File::open(path).map_err(|source| FilterError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(open_csv_reader(BufReader::new(file)))
}

pub fn open_csv_writer<W>(writer: W) -> csv::Writer<W>
where
    W: Write,
{
    let mut builder = csv::WriterBuilder::new();
    builder
        .delimiter(CSV_DELIMITER)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .double_quote(true)
        .flexible(true);
    builder.from_writer(writer)
}

pub fn open_csv_writer_to_path(path: &Path) -> Result<csv::Writer<BufWriter<File>>> {
    let file = File::create(path).map_err(|source| FilterError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(open_csv_writer(BufWriter::new(file)))
}

/// Consumes a leading UTF-8 byte order mark, reporting whether one was there.
///
/// The csv reader strips the mark silently, so it has to be taken off before
/// the first record is read.
pub fn take_utf8_bom<R>(reader: &mut R) -> io::Result<bool>
where
    R: BufRead,
{
    let found = reader.fill_buf()?.starts_with(UTF8_BOM);
    if found {
        reader.consume(UTF8_BOM.len());
    }
    Ok(found)
}

/// Returns a copy of `record` with the byte order mark prefixed to its first field.
pub fn with_utf8_bom(record: &ByteRecord) -> ByteRecord {
    let mut marked =
        ByteRecord::with_capacity(record.as_slice().len() + UTF8_BOM.len(), record.len());
    for (idx, field) in record.iter().enumerate() {
        if idx == 0 {
            marked.push_field(&[UTF8_BOM, field].concat());
        } else {
            marked.push_field(field);
        }
    }
    marked
}
