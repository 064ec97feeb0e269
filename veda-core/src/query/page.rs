//! Pagination envelope and limit policies.

use serde::{Deserialize, Serialize};

use super::QueryParams;

/// Default and optional maximum page size for one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitPolicy {
    /// Page size used when the caller supplies none (or an invalid one).
    pub default_limit: usize,
    /// Ceiling applied to caller-supplied limits, if any.
    pub max_limit: Option<usize>,
}

impl LimitPolicy {
    /// A policy without a ceiling.
    #[must_use]
    pub const fn uncapped(default_limit: usize) -> Self {
        Self {
            default_limit,
            max_limit: None,
        }
    }

    /// A policy that clamps limits to `max_limit`.
    #[must_use]
    pub const fn capped(default_limit: usize, max_limit: usize) -> Self {
        Self {
            default_limit,
            max_limit: Some(max_limit),
        }
    }

    /// Read `offset` and `limit` from `params` under this policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use veda_core::{LimitPolicy, QueryParams};
    ///
    /// let policy = LimitPolicy::capped(10, 100);
    /// let request = policy.page_request(&QueryParams::from_pairs([("limit", "1000")]));
    /// assert_eq!(request.limit, 100);
    /// assert_eq!(request.offset, 0);
    /// ```
    #[must_use]
    pub fn page_request(self, params: &QueryParams) -> PageRequest {
        let requested = params.count_or("limit", self.default_limit);
        let limit = self
            .max_limit
            .map_or(requested, |ceiling| requested.min(ceiling));
        PageRequest {
            offset: params.count_or("offset", 0),
            limit,
        }
    }
}

/// Offset and limit after defaults and ceilings were applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of matching records to skip.
    pub offset: usize,
    /// Maximum number of records to return.
    pub limit: usize,
}

/// One page of matching records with the total match count.
///
/// `offset` is the start actually used, clamped to `total`, and `limit` the
/// page size actually applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Number of records matching the filters, before pagination.
    pub total: usize,
    /// Index of the first returned record within the matches.
    pub offset: usize,
    /// Page size applied.
    pub limit: usize,
    /// Records on this page, in store order.
    pub data: Vec<T>,
}

impl<T: Clone> Page<T> {
    /// Slice `matches` according to `request`.
    ///
    /// Requests past the end produce an empty page with the full `total`.
    #[must_use]
    pub fn from_matches(matches: &[&T], request: PageRequest) -> Self {
        let total = matches.len();
        let start = request.offset.min(total);
        let data = matches
            .iter()
            .skip(start)
            .take(request.limit)
            .map(|record| (*record).clone())
            .collect();
        Self {
            total,
            offset: start,
            limit: request.limit,
            data,
        }
    }
}
