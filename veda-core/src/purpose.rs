//! Processing purpose records.

use serde::{Deserialize, Serialize};

use crate::Translations;

/// A processing purpose grouped by industry and sub-category.
///
/// `data_elements` holds [`DataElement`](crate::DataElement) identifiers by
/// value; they are never checked against the loaded data elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purpose {
    /// Source identifier.
    pub purpose_id: String,
    /// Industry the purpose belongs to.
    pub industry: String,
    /// Sub-category within the industry.
    pub sub_category: String,
    /// Referenced data element identifiers in source order.
    pub data_elements: Vec<String>,
    /// Purpose text per language; the original-language slot acts as title.
    pub translations: Translations,
}

impl Purpose {
    /// The purpose title, taken from the original-language translation.
    #[must_use]
    pub fn title(&self) -> &str {
        self.translations.original()
    }
}
