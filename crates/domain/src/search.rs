//! Search parameters — validated, defaulted input of the list query.
//!
//! Raw query-string values are parsed by hand into [`SearchParams`];
//! anything malformed or out of range becomes a [`ValidationError`].

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::query::{ServiceFilter, ServiceQuery, SortOrder};

/// Page used when the caller does not ask for one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Requested ordering of a service listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most recently created first.
    #[default]
    Newest,
    /// `name`: ascending by name.
    NameAsc,
    /// `-name`: descending by name.
    NameDesc,
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::NameAsc),
            "-name" => Ok(Self::NameDesc),
            other => Err(ValidationError::InvalidSortKey(other.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Newest => f.write_str("newest"),
            Self::NameAsc => f.write_str("name"),
            Self::NameDesc => f.write_str("-name"),
        }
    }
}

/// Validated paging, search and sort input for a service listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    page: u32,
    page_size: u32,
    search: Option<String>,
    sort: SortKey,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            sort: SortKey::Newest,
        }
    }
}

impl SearchParams {
    /// Build parameters for an explicit page.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPage`] when `page` is `0`, or
    /// [`ValidationError::InvalidPageSize`] when `page_size` is outside `1..=100`.
    pub fn new(page: u32, page_size: u32) -> Result<Self, ValidationError> {
        if page < 1 {
            return Err(ValidationError::InvalidPage(page.to_string()));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(ValidationError::InvalidPageSize(page_size.to_string()));
        }
        Ok(Self {
            page,
            page_size,
            ..Self::default()
        })
    }

    /// Parse raw query-string values, applying defaults for absent ones.
    ///
    /// Empty strings count as absent. A non-empty search term is kept
    /// verbatim, whitespace included.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first invalid parameter.
    pub fn parse(
        page: Option<&str>,
        page_size: Option<&str>,
        search: Option<&str>,
        sort_by: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let page = match non_empty(page) {
            Some(raw) => parse_page(raw)?,
            None => DEFAULT_PAGE,
        };
        let page_size = match non_empty(page_size) {
            Some(raw) => parse_page_size(raw)?,
            None => DEFAULT_PAGE_SIZE,
        };
        let sort = non_empty(sort_by)
            .map(SortKey::from_str)
            .transpose()?
            .unwrap_or_default();

        Ok(Self::new(page, page_size)?
            .with_search(search.unwrap_or_default())
            .with_sort(sort))
    }

    /// Set the free-text search term. Only the empty string means "no filter".
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    #[must_use]
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Translate into the bounded query the store executes.
    #[must_use]
    pub fn to_query(&self) -> ServiceQuery {
        let filter = match &self.search {
            Some(term) => ServiceFilter::containing(term),
            None => ServiceFilter::all(),
        };
        let order = match self.sort {
            SortKey::Newest => SortOrder::CreatedAtDesc,
            SortKey::NameAsc => SortOrder::NameAsc,
            SortKey::NameDesc => SortOrder::NameDesc,
        };
        let offset = u64::from(self.page - 1) * u64::from(self.page_size);

        ServiceQuery {
            filter,
            order,
            offset,
            limit: self.page_size,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_page(raw: &str) -> Result<u32, ValidationError> {
    raw.parse::<u32>()
        .ok()
        .filter(|page| *page >= 1)
        .ok_or_else(|| ValidationError::InvalidPage(raw.to_owned()))
}

fn parse_page_size(raw: &str) -> Result<u32, ValidationError> {
    raw.parse::<u32>()
        .ok()
        .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
        .ok_or_else(|| ValidationError::InvalidPageSize(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_defaults_when_nothing_given() {
        let params = SearchParams::parse(None, None, None, None).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), 10);
        assert_eq!(params.search(), None);
        assert_eq!(params.sort(), SortKey::Newest);
    }

    #[test]
    fn should_treat_empty_values_as_absent() {
        let params = SearchParams::parse(Some(""), Some(""), Some(""), Some("")).unwrap();
        assert_eq!(params, SearchParams::default());
    }

    #[test]
    fn should_parse_all_values() {
        let params =
            SearchParams::parse(Some("3"), Some("25"), Some("pay"), Some("-name")).unwrap();
        assert_eq!(params.page(), 3);
        assert_eq!(params.page_size(), 25);
        assert_eq!(params.search(), Some("pay"));
        assert_eq!(params.sort(), SortKey::NameDesc);
    }

    #[test]
    fn should_reject_page_zero_and_garbage() {
        for raw in ["0", "-1", "abc", "1.5"] {
            assert_eq!(
                SearchParams::parse(Some(raw), None, None, None),
                Err(ValidationError::InvalidPage(raw.to_string())),
            );
        }
    }

    #[test]
    fn should_reject_page_size_outside_bounds() {
        for raw in ["0", "101", "-3", "ten"] {
            assert_eq!(
                SearchParams::parse(None, Some(raw), None, None),
                Err(ValidationError::InvalidPageSize(raw.to_string())),
            );
        }
    }

    #[test]
    fn should_accept_page_size_bounds() {
        assert!(SearchParams::parse(None, Some("1"), None, None).is_ok());
        assert!(SearchParams::parse(None, Some("100"), None, None).is_ok());
    }

    #[test]
    fn should_reject_unknown_sort_key() {
        assert_eq!(
            SearchParams::parse(None, None, None, Some("created_at")),
            Err(ValidationError::InvalidSortKey("created_at".to_string())),
        );
    }

    #[test]
    fn should_reject_out_of_range_values_in_new() {
        assert!(SearchParams::new(0, 10).is_err());
        assert!(SearchParams::new(1, 0).is_err());
        assert!(SearchParams::new(1, 101).is_err());
    }

    #[test]
    fn should_compute_offset_from_page_and_size() {
        let query = SearchParams::new(3, 20).unwrap().to_query();
        assert_eq!(query.offset, 40);
        assert_eq!(query.limit, 20);

        let first = SearchParams::default().to_query();
        assert_eq!(first.offset, 0);
        assert_eq!(first.limit, 10);
    }

    #[test]
    fn should_not_overflow_offset_on_huge_page() {
        let query = SearchParams::new(u32::MAX, 100).unwrap().to_query();
        assert_eq!(query.offset, u64::from(u32::MAX - 1) * 100);
    }

    #[test]
    fn should_map_sort_key_to_order() {
        let base = SearchParams::default();
        assert_eq!(base.to_query().order, SortOrder::CreatedAtDesc);
        assert_eq!(
            base.clone().with_sort(SortKey::NameAsc).to_query().order,
            SortOrder::NameAsc
        );
        assert_eq!(
            base.with_sort(SortKey::NameDesc).to_query().order,
            SortOrder::NameDesc
        );
    }

    #[test]
    fn should_keep_search_whitespace_verbatim() {
        let blank = SearchParams::parse(None, None, Some("  "), None).unwrap();
        assert_eq!(blank.search(), Some("  "));
        assert_eq!(blank.to_query().filter, ServiceFilter::containing("  "));

        let trailing = SearchParams::parse(None, None, Some("Service "), None).unwrap();
        assert_eq!(trailing.search(), Some("Service "));
        assert_eq!(
            trailing.to_query().filter.like_pattern().as_deref(),
            Some("%service %")
        );
    }

    #[test]
    fn should_build_filter_only_for_non_empty_search() {
        assert_eq!(SearchParams::default().to_query().filter, ServiceFilter::all());
        assert_eq!(
            SearchParams::default().with_search("").to_query().filter,
            ServiceFilter::all()
        );
        assert_eq!(
            SearchParams::default()
                .with_search("Payment")
                .to_query()
                .filter,
            ServiceFilter::containing("Payment")
        );
    }

    #[test]
    fn should_display_sort_keys_as_query_values() {
        assert_eq!(SortKey::NameAsc.to_string(), "name");
        assert_eq!(SortKey::NameDesc.to_string(), "-name");
    }
}
