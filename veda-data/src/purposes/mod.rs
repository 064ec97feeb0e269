//! Header-driven loader for the purpose catalogue.
//!
//! Unlike data elements, purpose columns are resolved by header name so the
//! file may order them freely. Four columns are mandatory; the 23 language
//! columns are optional and read as empty text when absent.

use camino::Utf8Path;
use csv::StringRecord;
use log::{info, warn};
use std::{collections::HashMap, io::Read};
use veda_core::{InMemoryStore, LanguageCode, Purpose, Translations, split_and_trim};
use veda_fs::open_utf8_file;

use crate::{
    LoadError, LoadReport, Parsed,
    rows::{line_of, read_header},
};

/// Header names every purposes file must declare.
pub const REQUIRED_PURPOSE_HEADERS: [&str; 4] =
    ["purpose_id", "industry", "sub_category", "data_elements"];

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Column positions keyed by header name.
#[derive(Debug)]
struct HeaderIndex {
    columns: HashMap<String, usize>,
    width: usize,
}

impl HeaderIndex {
    fn empty() -> Self {
        Self {
            columns: HashMap::new(),
            width: 0,
        }
    }

    /// Later duplicates of a header name win.
    fn new(header: &StringRecord) -> Self {
        let columns = header
            .iter()
            .enumerate()
            .map(|(position, raw)| {
                let name = if position == 0 {
                    raw.trim_start_matches(BYTE_ORDER_MARK)
                } else {
                    raw
                };
                (name.to_owned(), position)
            })
            .collect();
        Self {
            columns,
            width: header.len(),
        }
    }

    fn require(&self, path: &Utf8Path) -> Result<(), LoadError> {
        REQUIRED_PURPOSE_HEADERS
            .into_iter()
            .find(|name| !self.columns.contains_key(*name))
            .map_or(Ok(()), |header| {
                Err(LoadError::MissingHeader {
                    path: path.to_owned(),
                    header,
                })
            })
    }

    /// Text under `name`, or empty when the column is not declared.
    fn value<'r>(&self, record: &'r StringRecord, name: &str) -> &'r str {
        self.columns
            .get(name)
            .and_then(|position| record.get(*position))
            .unwrap_or_default()
    }

    fn purpose(&self, record: &StringRecord) -> Purpose {
        let mut translations = Translations::default();
        for code in LanguageCode::ALL {
            translations.set(code, self.value(record, code.as_str()));
        }
        Purpose {
            purpose_id: self.value(record, "purpose_id").to_owned(),
            industry: self.value(record, "industry").to_owned(),
            sub_category: self.value(record, "sub_category").to_owned(),
            data_elements: split_and_trim(self.value(record, "data_elements")),
            translations,
        }
    }
}

/// Parse purposes from `reader`, resolving columns by header name.
///
/// `path` only labels log messages and errors. Rows shorter than the header
/// and undecodable rows, malformed quoting included, are skipped.
///
/// # Errors
/// Returns [`LoadError::Read`] when `reader` fails,
/// [`LoadError::ReadHeader`] or [`LoadError::MalformedHeader`] when the
/// header line cannot be decoded, and [`LoadError::MissingHeader`] when it lacks one of
/// [`REQUIRED_PURPOSE_HEADERS`]. An empty source has no header and fails the
/// same way.
pub fn read_purposes<R: Read>(reader: R, path: &Utf8Path) -> Result<Parsed<Purpose>, LoadError> {
    let rows = read_header(reader, path)?;
    let index = rows
        .header
        .as_ref()
        .map_or_else(HeaderIndex::empty, HeaderIndex::new);
    index.require(path)?;

    let mut parsed = Parsed::default();
    for row in rows {
        let record = match row {
            Ok(record) => record,
            Err(err) => {
                warn!("skipping purpose at line {} of {path}: {err}", err.line());
                parsed.skip();
                continue;
            }
        };
        if record.len() < index.width {
            warn!(
                "skipping purpose at line {} of {path}: expected {} columns, found {}",
                line_of(&record),
                index.width,
                record.len()
            );
            parsed.skip();
            continue;
        }
        parsed.keep(index.purpose(&record));
    }
    Ok(parsed)
}

/// Read `path` and replace the store's purposes with its rows.
///
/// # Errors
/// Propagates [`LoadError`] from opening or parsing; the store is left
/// unchanged on failure.
pub fn load_purposes(store: &InMemoryStore, path: &Utf8Path) -> Result<LoadReport, LoadError> {
    let file = open_utf8_file(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    let Parsed { records, report } = read_purposes(file, path)?;
    store.replace_purposes(records);
    info!(
        "loaded {} purposes from {path} ({} skipped)",
        report.loaded, report.skipped
    );
    Ok(report)
}
