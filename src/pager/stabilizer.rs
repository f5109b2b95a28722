//! Retention of the last good page across refetches.
//!
//! The stabilizer is what prevents flicker: while a new fetch is in flight,
//! the previously loaded connection stays available, so a UI paging from
//! page 1 to page 2 keeps rendering page 1's rows instead of a spinner or a
//! blank list. Only a successful fetch overwrites the retained connection; a
//! failure, or merely starting a new fetch, never clears it.
//!
//! The one situation that legitimately shows a loading state is the initial
//! load, when no success has ever arrived.

use crate::domain::{Connection, PageInfo};

/// Holds the most recently committed connection.
#[derive(Debug, Clone, Default)]
pub struct DataStabilizer<T> {
    last_good: Option<Connection<T>>,
}

impl<T> DataStabilizer<T> {
    /// Creates a stabilizer with nothing loaded yet.
    #[must_use]
    pub fn new() -> Self {
        Self { last_good: None }
    }

    /// Commits a successful fetch result, replacing the retained page.
    ///
    /// This is the only way the retained connection changes.
    pub fn commit(&mut self, connection: Connection<T>) {
        self.last_good = Some(connection);
    }

    /// The most recently committed connection, if any fetch ever succeeded.
    #[must_use]
    pub fn last_good(&self) -> Option<&Connection<T>> {
        self.last_good.as_ref()
    }

    /// Items of the retained page. Empty before the first success.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.last_good.as_ref().map_or(&[], |c| c.items.as_slice())
    }

    /// Number of items on the retained page.
    #[must_use]
    pub fn items_on_page(&self) -> usize {
        self.last_good.as_ref().map_or(0, Connection::len)
    }

    /// Page info of the retained page, if any.
    #[must_use]
    pub fn page_info(&self) -> Option<&PageInfo> {
        self.last_good.as_ref().map(|c| &c.page_info)
    }

    /// Total count reported by the retained page, if known.
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        self.last_good.as_ref().and_then(|c| c.total_count)
    }

    /// Whether any fetch has ever succeeded.
    #[must_use]
    pub fn has_loaded(&self) -> bool {
        self.last_good.is_some()
    }

    /// Whether the caller should render a dedicated loading state.
    ///
    /// True only while a fetch is in flight and no page was ever committed:
    /// after the first success there is always something better to show than
    /// a spinner.
    #[must_use]
    pub fn is_initial_load(&self, in_flight: bool) -> bool {
        in_flight && self.last_good.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: &[&str], has_next: bool) -> Connection<String> {
        Connection {
            items: items.iter().map(ToString::to_string).collect(),
            page_info: PageInfo {
                has_next_page: has_next,
                has_previous_page: false,
                start_cursor: items.first().map(ToString::to_string),
                end_cursor: items.last().map(ToString::to_string),
            },
            total_count: Some(25),
        }
    }

    #[test]
    fn empty_until_first_commit() {
        let stabilizer: DataStabilizer<String> = DataStabilizer::new();
        assert!(stabilizer.items().is_empty());
        assert!(!stabilizer.has_loaded());
        assert!(stabilizer.is_initial_load(true));
        assert!(!stabilizer.is_initial_load(false));
    }

    #[test]
    fn commit_replaces_retained_page() {
        let mut stabilizer = DataStabilizer::new();
        stabilizer.commit(page(&["a", "b"], true));
        assert_eq!(stabilizer.items(), ["a", "b"]);
        assert_eq!(stabilizer.items_on_page(), 2);
        assert_eq!(stabilizer.total_count(), Some(25));

        stabilizer.commit(page(&["c"], false));
        assert_eq!(stabilizer.items(), ["c"]);
        assert!(!stabilizer.page_info().unwrap().has_next_page);
    }

    #[test]
    fn in_flight_after_first_success_is_not_initial_load() {
        let mut stabilizer = DataStabilizer::new();
        stabilizer.commit(page(&["a"], true));
        // A refetch is in flight, but page data remains renderable.
        assert!(!stabilizer.is_initial_load(true));
        assert_eq!(stabilizer.items(), ["a"]);
    }
}
