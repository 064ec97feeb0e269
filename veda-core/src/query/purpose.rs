//! Purpose filters.

use super::{LimitPolicy, Page, PageRequest, QueryParams};
use crate::Purpose;

/// Purposes default to 10 per page and never exceed 100.
pub const PURPOSE_LIMITS: LimitPolicy = LimitPolicy::capped(10, 100);

/// Filters and pagination for a purpose query.
///
/// Filter values are trimmed; `industry` and `sub_category` compare whole
/// values ignoring case while `title` is a case-insensitive substring match
/// against the original-language translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurposeQuery {
    page: PageRequest,
    id: Option<String>,
    industry: Option<String>,
    sub_category: Option<String>,
    title: Option<String>,
}

impl Default for PurposeQuery {
    fn default() -> Self {
        Self {
            page: PageRequest {
                offset: 0,
                limit: PURPOSE_LIMITS.default_limit,
            },
            id: None,
            industry: None,
            sub_category: None,
            title: None,
        }
    }
}

impl PurposeQuery {
    /// Read filters from `offset`, `limit`, `id`, `industry`,
    /// `sub_category` and `title` parameters.
    #[must_use]
    pub fn from_params(params: &QueryParams) -> Self {
        let mut query = Self::default().with_page(PURPOSE_LIMITS.page_request(params));
        if let Some(id) = params.get("id") {
            query = query.with_id(id);
        }
        if let Some(industry) = params.get("industry") {
            query = query.with_industry(industry);
        }
        if let Some(sub_category) = params.get("sub_category") {
            query = query.with_sub_category(sub_category);
        }
        if let Some(title) = params.get("title") {
            query = query.with_title(title);
        }
        query
    }

    /// Use `page` for pagination.
    #[must_use]
    pub const fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    /// Keep only purposes whose id equals the trimmed `id`.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = trimmed(id, false);
        self
    }

    /// Keep only purposes in `industry`, ignoring case.
    #[must_use]
    pub fn with_industry(mut self, industry: &str) -> Self {
        self.industry = trimmed(industry, true);
        self
    }

    /// Keep only purposes in `sub_category`, ignoring case.
    #[must_use]
    pub fn with_sub_category(mut self, sub_category: &str) -> Self {
        self.sub_category = trimmed(sub_category, true);
        self
    }

    /// Keep only purposes whose title contains `title`, ignoring case.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = trimmed(title, true);
        self
    }

    /// Pagination applied to the matches.
    #[must_use]
    pub const fn page(&self) -> PageRequest {
        self.page
    }

    /// Evaluate the query against `records`.
    #[must_use]
    pub fn run(&self, records: &[Purpose]) -> Page<Purpose> {
        let matches: Vec<&Purpose> = records.iter().filter(|record| self.matches(record)).collect();
        Page::from_matches(&matches, self.page)
    }

    fn matches(&self, record: &Purpose) -> bool {
        let id_ok = self.id.as_deref().is_none_or(|id| record.purpose_id == id);
        let industry_ok = self
            .industry
            .as_deref()
            .is_none_or(|industry| record.industry.to_lowercase() == industry);
        let sub_category_ok = self
            .sub_category
            .as_deref()
            .is_none_or(|sub_category| record.sub_category.to_lowercase() == sub_category);
        let title_ok = self
            .title
            .as_deref()
            .is_none_or(|needle| record.title().to_lowercase().contains(needle));
        id_ok && industry_ok && sub_category_ok && title_ok
    }
}

fn trimmed(raw: &str, fold_case: bool) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        None
    } else if fold_case {
        Some(value.to_lowercase())
    } else {
        Some(value.to_owned())
    }
}
