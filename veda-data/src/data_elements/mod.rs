//! Positional loader for the data-element catalogue.
//!
//! Columns are read by position: id, title, description, aliases, domain and
//! a JSON object of translations. The header line is discarded unread.

use camino::Utf8Path;
use csv::StringRecord;
use log::{info, warn};
use std::io::Read;
use veda_core::{DataElement, InMemoryStore, Translations, split_and_trim};
use veda_fs::open_utf8_file;

use crate::{
    LoadError, LoadReport, Parsed,
    rows::{line_of, read_header},
};

/// Minimum number of columns a data-element row must carry.
pub const DATA_ELEMENT_COLUMNS: usize = 6;

/// Parse data elements from `reader`.
///
/// `path` only labels log messages and errors. Short or undecodable rows,
/// including rows with malformed quoting, are skipped; unreadable
/// translations are replaced by empty ones.
///
/// # Errors
/// Returns [`LoadError::Read`] when `reader` fails, and
/// [`LoadError::ReadHeader`] or [`LoadError::MalformedHeader`] when the first
/// line cannot be decoded.
///
/// # Examples
/// ```
/// use camino::Utf8Path;
/// use veda_data::read_data_elements;
///
/// let csv = "id,title,description,aliases,domain,translations\n\
///            DE-1,Passport Number,Travel document,\"passport, pp\",Identity,{}\n";
/// let parsed = read_data_elements(csv.as_bytes(), Utf8Path::new("inline.csv")).unwrap();
/// assert_eq!(parsed.records[0].aliases, ["passport", "pp"]);
/// assert_eq!(parsed.records[0].translations.original(), "Passport Number");
/// ```
pub fn read_data_elements<R: Read>(
    reader: R,
    path: &Utf8Path,
) -> Result<Parsed<DataElement>, LoadError> {
    let rows = read_header(reader, path)?;
    let mut parsed = Parsed::default();
    if rows.header.is_none() {
        return Ok(parsed);
    }
    for row in rows {
        let record = match row {
            Ok(record) => record,
            Err(err) => {
                warn!("skipping data element at line {} of {path}: {err}", err.line());
                parsed.skip();
                continue;
            }
        };
        let Some(columns) = Columns::from_record(&record) else {
            warn!(
                "skipping data element at line {} of {path}: expected {DATA_ELEMENT_COLUMNS} columns, found {}",
                line_of(&record),
                record.len()
            );
            parsed.skip();
            continue;
        };
        let translations = match parse_translations(columns.translations) {
            Ok(translations) => translations,
            Err(err) => {
                warn!(
                    "defaulting translations for data element {} at line {} of {path}: {err}",
                    columns.id,
                    line_of(&record)
                );
                parsed.report.defaulted_translations += 1;
                Translations::default()
            }
        };
        parsed.keep(columns.into_element(translations));
    }
    Ok(parsed)
}

/// Read `path` and replace the store's data elements with its rows.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file cannot be opened, plus any error
/// from [`read_data_elements`]; the store is left unchanged in every case.
pub fn load_data_elements(store: &InMemoryStore, path: &Utf8Path) -> Result<LoadReport, LoadError> {
    let file = open_utf8_file(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    let Parsed { records, report } = read_data_elements(file, path)?;
    store.replace_data_elements(records);
    info!(
        "loaded {} data elements from {path} ({} skipped, {} with default translations)",
        report.loaded, report.skipped, report.defaulted_translations
    );
    Ok(report)
}

/// Borrowed view of the six positional columns.
struct Columns<'r> {
    id: &'r str,
    title: &'r str,
    description: &'r str,
    aliases: &'r str,
    domain: &'r str,
    translations: &'r str,
}

impl<'r> Columns<'r> {
    fn from_record(record: &'r StringRecord) -> Option<Self> {
        let mut fields = record.iter();
        Some(Self {
            id: fields.next()?,
            title: fields.next()?,
            description: fields.next()?,
            aliases: fields.next()?,
            domain: fields.next()?,
            translations: fields.next()?,
        })
    }

    fn into_element(self, translations: Translations) -> DataElement {
        DataElement::new(
            self.id.to_owned(),
            self.title.to_owned(),
            self.description.to_owned(),
            split_and_trim(self.aliases),
            self.domain.to_owned(),
            translations,
        )
    }
}

/// A JSON `null` reads as empty translations rather than an error.
fn parse_translations(raw: &str) -> serde_json::Result<Translations> {
    serde_json::from_str::<Option<Translations>>(raw).map(Option::unwrap_or_default)
}
