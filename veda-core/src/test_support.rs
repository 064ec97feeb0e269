//! Record builders shared by unit and behaviour tests.

use crate::{DataElement, LanguageCode, Purpose, Translations, split_and_trim};

/// Build a data element with empty description, aliases and translations.
#[must_use]
pub fn data_element(id: &str, title: &str, domain: &str) -> DataElement {
    DataElement::new(
        id.to_owned(),
        title.to_owned(),
        String::new(),
        Vec::new(),
        domain.to_owned(),
        Translations::default(),
    )
}

/// Build a purpose whose original-language text is `title`.
///
/// `data_elements` is a comma-separated list of identifiers.
#[must_use]
pub fn purpose(
    purpose_id: &str,
    industry: &str,
    sub_category: &str,
    title: &str,
    data_elements: &str,
) -> Purpose {
    let mut translations = Translations::default();
    translations.set(LanguageCode::DEFAULT, title);
    Purpose {
        purpose_id: purpose_id.to_owned(),
        industry: industry.to_owned(),
        sub_category: sub_category.to_owned(),
        data_elements: split_and_trim(data_elements),
        translations,
    }
}

/// A small catalogue of data elements spanning two domains.
#[must_use]
pub fn sample_data_elements() -> Vec<DataElement> {
    vec![
        data_element("DE-1", "Passport Number", "Identity"),
        data_element("DE-2", "Email Address", "Contact"),
        data_element("DE-3", "Aadhaar Number", "Identity"),
        data_element("DE-4", "Phone Number", "Contact Details"),
        data_element("DE-5", "Bank Account Number", "Financial"),
    ]
}

/// A small catalogue of purposes spanning two industries.
#[must_use]
pub fn sample_purposes() -> Vec<Purpose> {
    vec![
        purpose("P-1", "Finance", "Lending", "Credit assessment", "DE-1, DE-5"),
        purpose("P-2", "Healthcare", "Clinics", "Appointment reminders", "DE-2,DE-4"),
        purpose("P-3", "finance", "Insurance", "Claim settlement", "DE-3"),
        purpose("P-4", "Retail", "E-commerce", "Order delivery", "DE-2, DE-4"),
    ]
}
