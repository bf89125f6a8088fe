//! Query specification — the filter, order and bounds a store executes.
//!
//! Storage adapters interpret a [`ServiceQuery`] in their own SQL dialect.
//! The in-memory helpers ([`ServiceFilter::matches`], [`SortOrder::compare`])
//! define the same semantics for stores that do not speak SQL.

use std::cmp::Ordering;

use crate::service::Service;

/// Escape character used in [`ServiceFilter::like_pattern`].
pub const LIKE_ESCAPE: char = '\\';

/// Which records a listing covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceFilter {
    term: Option<String>,
}

impl ServiceFilter {
    /// Match every record.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Match records whose name or description contains `term`,
    /// ignoring case. An empty term matches everything.
    #[must_use]
    pub fn containing(term: impl Into<String>) -> Self {
        let term = term.into();
        Self {
            term: (!term.is_empty()).then_some(term),
        }
    }

    /// The search term, if the filter restricts anything.
    #[must_use]
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// A `LIKE` pattern for substring containment of the term.
    ///
    /// `%`, `_` and the escape character itself are escaped with
    /// [`LIKE_ESCAPE`] so the term is matched literally. The pattern is
    /// lowercased; callers compare it against lowercased columns.
    #[must_use]
    pub fn like_pattern(&self) -> Option<String> {
        let term = self.term.as_deref()?;
        let mut pattern = String::with_capacity(term.len() + 2);
        pattern.push('%');
        for c in term.to_lowercase().chars() {
            if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c);
        }
        pattern.push('%');
        Some(pattern)
    }

    /// Whether `service` passes this filter.
    #[must_use]
    pub fn matches(&self, service: &Service) -> bool {
        let Some(term) = self.term.as_deref() else {
            return true;
        };
        let needle = term.to_lowercase();
        service.name.to_lowercase().contains(&needle)
            || service.description.to_lowercase().contains(&needle)
    }
}

/// Total order applied to a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending by name.
    NameAsc,
    /// Descending by name.
    NameDesc,
    /// Newest first; ties broken by descending id.
    #[default]
    CreatedAtDesc,
}

impl SortOrder {
    /// Compare two records according to this order.
    #[must_use]
    pub fn compare(self, a: &Service, b: &Service) -> Ordering {
        match self {
            Self::NameAsc => a.name.cmp(&b.name),
            Self::NameDesc => b.name.cmp(&a.name),
            Self::CreatedAtDesc => b
                .created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id)),
        }
    }
}

/// A filtered, ordered, bounded listing request.
///
/// Counting uses only [`filter`](Self::filter); fetching uses all fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceQuery {
    pub filter: ServiceFilter,
    pub order: SortOrder,
    pub offset: u64,
    pub limit: u32,
}
