//! Shared CSV plumbing for both loaders.
//!
//! The `csv` crate accepts stray quotes and keeps them as text. Both
//! catalogues treat such lines as undecodable, so every record is checked
//! against its raw bytes before a loader sees it.

use camino::Utf8Path;
use csv::{Reader, ReaderBuilder, StringRecord};
use std::io::{Cursor, Read};
use thiserror::Error;

use crate::LoadError;

const QUOTE: u8 = b'"';
const DELIMITER: u8 = b',';
const BYTE_ORDER_MARK: &[u8] = b"\xef\xbb\xbf";

/// How a line misuses double quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteFault {
    /// A quote appears inside a field that did not open with one.
    #[error("bare \" in non-quoted field")]
    BareQuote,
    /// A quoted field is followed by text, or never closes.
    #[error("extraneous or missing \" in quoted field")]
    StrayQuote,
}

/// A data row that could not be decoded.
#[derive(Debug, Error)]
pub(crate) enum RowError {
    #[error(transparent)]
    Decode(csv::Error),
    #[error("{fault}")]
    Quoting { line: u64, fault: QuoteFault },
}

impl RowError {
    /// One-based line number for log messages.
    pub(crate) fn line(&self) -> u64 {
        match self {
            Self::Decode(err) => err.position().map_or(0, csv::Position::line),
            Self::Quoting { line, .. } => *line,
        }
    }
}

/// Build a reader that yields every line, header included, and tolerates
/// rows of differing widths so width rules stay with each loader.
fn csv_reader(buffer: Vec<u8>) -> Reader<Cursor<Vec<u8>>> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(buffer))
}

/// Records following a consumed header line.
pub(crate) struct Rows {
    pub(crate) header: Option<StringRecord>,
    reader: Reader<Cursor<Vec<u8>>>,
}

impl Rows {
    fn check_quoting(&self, record: StringRecord) -> Result<StringRecord, RowError> {
        let start = record.position().map_or(0, csv::Position::byte);
        let end = self.reader.position().byte();
        let raw = usize::try_from(start)
            .ok()
            .zip(usize::try_from(end).ok())
            .and_then(|(from, to)| self.reader.get_ref().get_ref().get(from..to))
            .unwrap_or_default();
        match quote_fault(raw) {
            None => Ok(record),
            Some(fault) => Err(RowError::Quoting {
                line: line_of(&record),
                fault,
            }),
        }
    }
}

impl Iterator for Rows {
    type Item = Result<StringRecord, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(false) => None,
            Ok(true) => Some(self.check_quoting(record)),
            Err(err) => Some(Err(RowError::Decode(err))),
        }
    }
}

/// Buffer `reader` and consume the header line. An empty source yields
/// `header: None`.
pub(crate) fn read_header<R: Read>(mut reader: R, path: &Utf8Path) -> Result<Rows, LoadError> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|source| LoadError::Read {
            path: path.to_owned(),
            source,
        })?;
    let mut rows = Rows {
        header: None,
        reader: csv_reader(buffer),
    };
    rows.header = rows.next().transpose().map_err(|err| match err {
        RowError::Decode(source) => LoadError::ReadHeader {
            path: path.to_owned(),
            source,
        },
        RowError::Quoting { fault, .. } => LoadError::MalformedHeader {
            path: path.to_owned(),
            fault,
        },
    })?;
    Ok(rows)
}

/// One-based line number for log messages.
#[must_use]
pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

/// Find the first quoting fault in the raw bytes of one record.
///
/// A field is quoted only when its first byte is `"`. Inside it `""` is an
/// escaped quote and a lone `"` must be followed by a delimiter or the end
/// of the record.
fn quote_fault(raw: &[u8]) -> Option<QuoteFault> {
    let mut bytes = trim_line(raw).iter().copied().peekable();
    let mut field_start = true;
    let mut in_quotes = false;
    while let Some(byte) = bytes.next() {
        if in_quotes {
            if byte == QUOTE {
                match bytes.peek() {
                    Some(&QUOTE) => {
                        bytes.next();
                    }
                    Some(&DELIMITER) | None => in_quotes = false,
                    Some(_) => return Some(QuoteFault::StrayQuote),
                }
            }
            continue;
        }
        match byte {
            DELIMITER => field_start = true,
            QUOTE if field_start => {
                in_quotes = true;
                field_start = false;
            }
            QUOTE => return Some(QuoteFault::BareQuote),
            _ => field_start = false,
        }
    }
    in_quotes.then_some(QuoteFault::StrayQuote)
}

/// Strip a byte-order mark and surrounding line breaks.
fn trim_line(raw: &[u8]) -> &[u8] {
    let mut line = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw);
    while let [b'\r' | b'\n', rest @ ..] = line {
        line = rest;
    }
    while let [rest @ .., b'\r' | b'\n'] = line {
        line = rest;
    }
    line
}
