//! Connection domain model following the Relay pagination convention.
//!
//! This module defines the wire-adjacent types a cursor-paginated source
//! returns: a page of items ([`Connection`]) plus pagination metadata
//! ([`PageInfo`]). Field names serialize in camelCase so the types line up
//! with GraphQL connection payloads without a mapping layer.
//!
//! # Cursors
//!
//! A cursor is an opaque token issued by the source. The engine never
//! interprets or mutates one; it only stores cursors and hands them back on
//! the next fetch. `None` means "first page".

use serde::{Deserialize, Serialize};

/// An opaque position token issued by the data source.
///
/// `None` addresses the first page. A `Some` value is meaningful only to the
/// source that issued it; the engine compares and stores cursors but never
/// looks inside.
pub type Cursor = Option<String>;

/// Pagination metadata attached to every fetched page.
///
/// Mirrors the Relay `PageInfo` object. Note that `has_previous_page` is
/// unreliable for cursor-only sources: most backends cannot answer it for an
/// arbitrary cursor and report `false` unconditionally. The engine therefore
/// always ORs it with its own navigation history and never trusts the server
/// value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether a page exists after this one.
    pub has_next_page: bool,

    /// Whether a page exists before this one, as reported by the source.
    ///
    /// Untrusted; see the type-level documentation.
    pub has_previous_page: bool,

    /// Cursor of the first item on this page, if the page is non-empty.
    pub start_cursor: Cursor,

    /// Cursor addressing the position after the last item on this page.
    ///
    /// Passing this as the cursor of the next fetch yields the following
    /// page. `None` when the page is empty.
    pub end_cursor: Cursor,
}

/// A page of items plus pagination metadata.
///
/// The unit a page source returns per fetch. `total_count` reflects the
/// currently active search filter, not the unfiltered universe, and is always
/// present once a fetch succeeds against a well-behaved source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Ordered items on this page.
    pub items: Vec<T>,

    /// Pagination metadata for this page.
    pub page_info: PageInfo,

    /// Number of items matching the active filter across all pages.
    pub total_count: Option<u64>,
}

impl<T> Connection<T> {
    /// Creates an empty connection with no further pages.
    ///
    /// Useful for sources that have nothing matching a filter: an empty item
    /// list, `has_next_page: false`, and a zero total.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: vec![],
            page_info: PageInfo::default(),
            total_count: Some(0),
        }
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_info_round_trips_camel_case() {
        let json = r#"{
            "hasNextPage": true,
            "hasPreviousPage": false,
            "startCursor": "abc",
            "endCursor": "def"
        }"#;

        let info: PageInfo = serde_json::from_str(json).unwrap();
        assert!(info.has_next_page);
        assert!(!info.has_previous_page);
        assert_eq!(info.start_cursor.as_deref(), Some("abc"));
        assert_eq!(info.end_cursor.as_deref(), Some("def"));
    }

    #[test]
    fn empty_connection_has_zero_total() {
        let conn: Connection<String> = Connection::empty();
        assert!(conn.is_empty());
        assert_eq!(conn.len(), 0);
        assert_eq!(conn.total_count, Some(0));
        assert!(!conn.page_info.has_next_page);
        assert!(conn.page_info.end_cursor.is_none());
    }
}
