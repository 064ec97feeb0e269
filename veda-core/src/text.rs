//! Helpers for normalising delimited list fields.

/// Split a comma-separated field into trimmed parts.
///
/// Blank input yields an empty list rather than a single empty string.
/// Interior empty parts (`"a,,b"`) are kept so positions are preserved.
///
/// # Examples
///
/// ```
/// use veda_core::split_and_trim;
///
/// assert_eq!(split_and_trim("a, b ,c"), vec!["a", "b", "c"]);
/// assert!(split_and_trim("").is_empty());
/// ```
#[must_use]
pub fn split_and_trim(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|part| part.trim().to_owned()).collect()
}
