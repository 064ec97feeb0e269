//! Data element records.

use serde::{Deserialize, Serialize};

use crate::{LanguageCode, Translations};

/// A single personal-data element such as "Passport Number".
///
/// Identifiers are expected to be unique but are not checked; duplicate rows
/// are retained in load order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataElement {
    /// Source identifier.
    pub id: String,
    /// Display title, mirrored into the original-language translation.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Alternative names in source order.
    pub aliases: Vec<String>,
    /// Free-text domain, matched case-insensitively.
    pub domain: String,
    /// Title translations.
    pub translations: Translations,
}

impl DataElement {
    /// Build a data element, copying `title` into the original-language slot.
    ///
    /// Whatever the supplied translations hold for that slot is replaced so
    /// `title` and the default translation always agree.
    ///
    /// # Examples
    ///
    /// ```
    /// use veda_core::{DataElement, LanguageCode, Translations};
    ///
    /// let mut translations = Translations::default();
    /// translations.set(LanguageCode::Eng, "stale");
    /// let element = DataElement::new(
    ///     "DE-7".into(),
    ///     "Email Address".into(),
    ///     String::new(),
    ///     Vec::new(),
    ///     "Contact".into(),
    ///     translations,
    /// );
    /// assert_eq!(element.translations.original(), "Email Address");
    /// ```
    #[must_use]
    pub fn new(
        id: String,
        title: String,
        description: String,
        aliases: Vec<String>,
        domain: String,
        mut translations: Translations,
    ) -> Self {
        translations.set(LanguageCode::DEFAULT, title.as_str());
        Self {
            id,
            title,
            description,
            aliases,
            domain,
            translations,
        }
    }
}
