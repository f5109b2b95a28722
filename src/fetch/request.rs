//! Fetch request protocol between the engine and a page source.
//!
//! Every fetch the reducer issues is described by a [`FetchRequest`]: the
//! exact query parameters plus a monotonically increasing generation tag.
//! When the corresponding resolution comes back, the reducer commits it only
//! if the generation matches the outstanding request and the parameters still
//! equal the engine's current ones. Anything else is a stale response from a
//! superseded request and is dropped silently; there is no request queuing
//! and no explicit cancellation.

use crate::domain::{Cursor, OrderDescriptor, SortState};
use serde::{Deserialize, Serialize};

/// The exact parameters of one page fetch.
///
/// This is the full collaborator contract: cursor, page size, committed
/// search term, and active sort. Two requests with equal parameters address
/// the same page of the same filtered, ordered result set, which is what
/// makes parameter comparison a valid staleness check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchParams {
    /// Position to fetch from. `None` addresses the first page.
    pub cursor: Cursor,

    /// Maximum number of items to return.
    pub page_size: usize,

    /// Committed search term. Empty means unfiltered.
    pub search_term: String,

    /// Active sort, if any.
    pub sort: Option<SortState>,
}

impl FetchParams {
    /// The wire-level order descriptor for the active sort, if any.
    #[must_use]
    pub fn order(&self) -> Option<OrderDescriptor> {
        self.sort.as_ref().map(SortState::descriptor)
    }
}

/// A tagged fetch: parameters plus the generation that issued them.
///
/// The generation is assigned by the reducer and increases with every issued
/// fetch within one listing session. It never resets mid-session, so a slow
/// response can always be identified as outdated no matter how many
/// navigations happened while it was in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    /// Monotonically increasing tag identifying this fetch.
    pub generation: u64,

    /// The query parameters of this fetch.
    pub params: FetchParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortState;

    #[test]
    fn params_equality_covers_every_field() {
        let base = FetchParams {
            cursor: Some("c1".into()),
            page_size: 10,
            search_term: "abc".into(),
            sort: Some(SortState::ascending("name")),
        };

        assert_eq!(base, base.clone());
        assert_ne!(base, FetchParams { cursor: None, ..base.clone() });
        assert_ne!(base, FetchParams { page_size: 20, ..base.clone() });
        assert_ne!(base, FetchParams { search_term: "abd".into(), ..base.clone() });
        assert_ne!(base, FetchParams { sort: None, ..base.clone() });
    }

    #[test]
    fn order_descriptor_follows_sort() {
        let mut params = FetchParams::default();
        assert!(params.order().is_none());

        params.sort = Some(SortState::descending("email"));
        let order = params.order().unwrap();
        assert_eq!(order.field, "email");
        assert_eq!(order.direction, "DESC");
    }
}
