//! Raw query-string parameters.

/// Decoded key/value pairs from a request's query string.
///
/// Lookups return the first occurrence of a key, so `?id=a&id=b` reads as
/// `id=a`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Collect parameters from decoded key/value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use veda_core::QueryParams;
    ///
    /// let params = QueryParams::from_pairs([("limit", "5"), ("limit", "9")]);
    /// assert_eq!(params.get("limit"), Some("5"));
    /// assert_eq!(params.get("offset"), None);
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// First value supplied for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    /// First value for `key`, treating an empty value as absent.
    #[must_use]
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Parse `key` as a non-negative count, falling back to `default`.
    ///
    /// Missing, negative, overflowing and non-numeric values all yield
    /// `default`; this never fails.
    #[must_use]
    pub fn count_or(&self, key: &str, default: usize) -> usize {
        self.get(key)
            .and_then(|raw| raw.parse::<usize>().ok())
            .unwrap_or(default)
    }
}
