//! Data element filters.

use super::{LimitPolicy, Page, PageRequest, QueryParams};
use crate::DataElement;

/// Data elements default to 100 per page with no ceiling.
pub const DATA_ELEMENT_LIMITS: LimitPolicy = LimitPolicy::uncapped(100);

/// Filters and pagination for a data element query.
///
/// All filters combine with logical AND. Setting an exact title switches the
/// query into single-record mode and every other filter is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataElementQuery {
    page: PageRequest,
    id: Option<String>,
    domain: Option<String>,
    title: Option<String>,
    exact_title: Option<String>,
}

impl Default for DataElementQuery {
    fn default() -> Self {
        Self {
            page: PageRequest {
                offset: 0,
                limit: DATA_ELEMENT_LIMITS.default_limit,
            },
            id: None,
            domain: None,
            title: None,
            exact_title: None,
        }
    }
}

impl DataElementQuery {
    /// Read filters from `offset`, `limit`, `id`, `domain`, `title` and
    /// `de_title` parameters.
    #[must_use]
    pub fn from_params(params: &QueryParams) -> Self {
        let mut query = Self::default().with_page(DATA_ELEMENT_LIMITS.page_request(params));
        if let Some(id) = params.non_empty("id") {
            query = query.with_id(id);
        }
        if let Some(domain) = params.non_empty("domain") {
            query = query.with_domain(domain);
        }
        if let Some(title) = params.non_empty("title") {
            query = query.with_title(title);
        }
        if let Some(exact) = params.non_empty("de_title") {
            query = query.with_exact_title(exact);
        }
        query
    }

    /// Use `page` for pagination.
    #[must_use]
    pub const fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    /// Keep only records whose id equals `id` exactly.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    /// Keep only records whose domain contains `domain`, ignoring case.
    #[must_use]
    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain = Some(domain.to_lowercase());
        self
    }

    /// Keep only records whose title contains `title`, ignoring case.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_lowercase());
        self
    }

    /// Look up the first record titled exactly `title` (case-sensitive).
    #[must_use]
    pub fn with_exact_title(mut self, title: &str) -> Self {
        self.exact_title = Some(title.to_owned());
        self
    }

    /// Pagination applied in list mode.
    #[must_use]
    pub const fn page(&self) -> PageRequest {
        self.page
    }

    /// Evaluate the query against `records`.
    #[must_use]
    pub fn run(&self, records: &[DataElement]) -> DataElementResult {
        if let Some(exact) = &self.exact_title {
            return records
                .iter()
                .find(|record| record.title == *exact)
                .map_or(DataElementResult::NotFound, |record| {
                    DataElementResult::Found(record.clone())
                });
        }
        let matches: Vec<&DataElement> =
            records.iter().filter(|record| self.matches(record)).collect();
        DataElementResult::Page(Page::from_matches(&matches, self.page))
    }

    fn matches(&self, record: &DataElement) -> bool {
        let domain_ok = self
            .domain
            .as_deref()
            .is_none_or(|needle| record.domain.to_lowercase().contains(needle));
        let title_ok = self
            .title
            .as_deref()
            .is_none_or(|needle| record.title.to_lowercase().contains(needle));
        let id_ok = self.id.as_deref().is_none_or(|id| record.id == id);
        domain_ok && title_ok && id_ok
    }
}

/// Outcome of a data element query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataElementResult {
    /// A page of matches (list mode).
    Page(Page<DataElement>),
    /// The record matching an exact title lookup.
    Found(DataElement),
    /// No record matched an exact title lookup.
    NotFound,
}
