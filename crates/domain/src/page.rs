//! Page envelope returned by service listings.

use serde::{Deserialize, Serialize};

use crate::search::SearchParams;
use crate::service::Service;

/// One page of matching services plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePage {
    /// Number of records matching the filter, across all pages.
    pub total: u64,
    /// The resolved page number.
    pub page: u32,
    /// The resolved page size.
    pub page_size: u32,
    /// Records on this page, in the requested order.
    pub services: Vec<Service>,
}

impl ServicePage {
    /// Wrap `services` with the metadata echoed from `params`.
    #[must_use]
    pub fn new(params: &SearchParams, total: u64, services: Vec<Service>) -> Self {
        Self {
            total,
            page: params.page(),
            page_size: params.page_size(),
            services,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_echo_resolved_params() {
        let params = SearchParams::new(4, 7).unwrap();
        let page = ServicePage::new(&params, 12, vec![]);
        assert_eq!(page.page, 4);
        assert_eq!(page.page_size, 7);
        assert_eq!(page.total, 12);
    }

    #[test]
    fn should_serialize_envelope_fields() {
        let page = ServicePage::new(&SearchParams::default(), 0, vec![]);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"total": 0, "page": 1, "page_size": 10, "services": []})
        );
    }
}
