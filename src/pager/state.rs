//! Pagination state container and view computation.
//!
//! This module defines [`PagerState`], the single source of truth for one
//! listing session, and [`PagerView`], the read-only projection a UI renders.
//! The state is created once per mounted listing, mutated exclusively by
//! [`handle_event`](crate::pager::handle_event), and discarded when the
//! listing is torn down.
//!
//! # Bookkeeping
//!
//! Two counters drive the display range:
//!
//! - `base_count` — items traversed before the page the cursor currently
//!   addresses. Updated at navigation time: forward navigation sets it to the
//!   committed cumulative count, backward navigation restores it from the
//!   popped history entry's recorded range start.
//! - `cumulative_count` — items traversed up to and including the currently
//!   committed page; equals the displayed range end. Updated only when a
//!   fetch commits, as `base_count` plus the actual item count of the new
//!   page, so a short final page never drifts the range.
//!
//! Alongside them, `committed_cursor` records which cursor produced the page
//! the stabilizer holds. Navigation decisions read the committed pair
//! (stabilizer + `committed_cursor`), never the possibly half-advanced
//! `cursor` of a pending fetch, so a navigation issued while another is in
//! flight still books a coherent departure point.
//!
//! The fields are crate-private: external code observes the state through
//! accessors and [`PagerState::view`], and changes it by dispatching events.

use crate::domain::{Cursor, FetchError, PageInfo, SortState};
use crate::fetch::FetchParams;
use crate::pager::history::CursorHistory;
use crate::pager::range::{self, ItemRange};
use crate::pager::stabilizer::DataStabilizer;

/// Full pagination state for one listing session.
///
/// See the module documentation for the counter bookkeeping. The fetch
/// tagging fields (`generation`, `in_flight`) implement the stale-response
/// guard: a resolution commits only if it carries the outstanding generation
/// and its parameters still equal the current ones.
#[derive(Debug, Clone)]
pub struct PagerState<T> {
    /// Cursor addressing the current page. `None` on the first page.
    pub(crate) cursor: Cursor,

    /// Items requested per page.
    pub(crate) page_size: usize,

    /// Committed search term. Empty means unfiltered.
    pub(crate) search_term: String,

    /// Active sort, if any.
    pub(crate) sort: Option<SortState>,

    /// Departure points for backward navigation.
    pub(crate) history: CursorHistory,

    /// Items traversed before the page the cursor addresses.
    pub(crate) base_count: u64,

    /// Items traversed up to and including the committed page.
    pub(crate) cumulative_count: u64,

    /// Cursor that addressed the page the stabilizer currently holds.
    ///
    /// Paired with the stabilizer: updated only when a fetch commits, never
    /// by navigation. Forward navigation records this as the departure
    /// point, because `cursor` may already belong to a pending, superseded
    /// navigation.
    pub(crate) committed_cursor: Cursor,

    /// Retains the last successfully loaded page across refetches.
    pub(crate) stabilizer: DataStabilizer<T>,

    /// The most recent fetch error, cleared by the next successful commit.
    pub(crate) error: Option<FetchError>,

    /// Generation tag of the most recently issued fetch.
    pub(crate) generation: u64,

    /// Generation of the outstanding fetch, if one is in flight.
    pub(crate) in_flight: Option<u64>,
}

impl<T> PagerState<T> {
    /// Creates the state for a fresh listing session.
    ///
    /// Starts on the first page with empty history, no data, and nothing in
    /// flight. The caller dispatches
    /// [`Event::FirstPageRequested`](crate::pager::Event::FirstPageRequested)
    /// to issue the initial load.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            cursor: None,
            page_size,
            search_term: String::new(),
            sort: None,
            history: CursorHistory::new(),
            base_count: 0,
            cumulative_count: 0,
            committed_cursor: None,
            stabilizer: DataStabilizer::new(),
            error: None,
            generation: 0,
            in_flight: None,
        }
    }

    /// Cursor addressing the current page.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Items requested per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Committed search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Active sort, if any.
    #[must_use]
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Number of recorded forward steps since the last reset.
    #[must_use]
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    /// Items traversed up to and including the committed page.
    #[must_use]
    pub fn cumulative_count(&self) -> u64 {
        self.cumulative_count
    }

    /// Whether a fetch is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The most recent fetch error, if the last fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// The exact parameters a fetch issued right now would carry.
    #[must_use]
    pub fn current_params(&self) -> FetchParams {
        FetchParams {
            cursor: self.cursor.clone(),
            page_size: self.page_size,
            search_term: self.search_term.clone(),
            sort: self.sort.clone(),
        }
    }

    /// Computes the read-only view a UI renders.
    ///
    /// Items, page info, and total always come from the most recent
    /// successful fetch; a fetch in flight or a surfaced error never blanks
    /// them. `can_load_previous` ORs the untrusted server flag with the
    /// engine's own history, plus the degraded "history lost but not on the
    /// first page" case that falls back to a first-page jump.
    #[must_use]
    pub fn view(&self) -> PagerView<'_, T> {
        let page_info = self.stabilizer.page_info();
        let items_on_page = self.stabilizer.items_on_page();

        let can_load_next = page_info.is_some_and(|info| {
            info.has_next_page
                && info.end_cursor.is_some()
                && self.cursor != info.end_cursor
        });

        let can_load_previous = !self.history.is_empty()
            || page_info.is_some_and(|info| info.has_previous_page)
            || self.cursor.is_some();

        PagerView {
            items: self.stabilizer.items(),
            page_info,
            total_count: self.stabilizer.total_count(),
            range: range::compute(
                self.cumulative_count,
                items_on_page,
                self.stabilizer.total_count(),
            ),
            can_load_next,
            can_load_previous,
            is_loading: self.in_flight.is_some(),
            is_initial_load: self.stabilizer.is_initial_load(self.in_flight.is_some()),
            error: self.error.as_ref(),
        }
    }
}

/// Read-only projection of [`PagerState`] for rendering.
///
/// Borrowed from the state; compute it fresh after every dispatched event.
#[derive(Debug)]
pub struct PagerView<'a, T> {
    /// Rows of the most recently committed page.
    pub items: &'a [T],

    /// Page info of the most recently committed page, if any.
    pub page_info: Option<&'a PageInfo>,

    /// Total items matching the active filter, if known.
    pub total_count: Option<u64>,

    /// 1-based inclusive display range, `{0, 0, total}` when empty.
    pub range: ItemRange,

    /// Whether a next-page navigation would do anything.
    pub can_load_next: bool,

    /// Whether a previous-page navigation would do anything.
    pub can_load_previous: bool,

    /// Whether a fetch is in flight.
    pub is_loading: bool,

    /// Whether to render a dedicated loading state: in flight with no page
    /// ever committed. After the first success this stays `false`; the
    /// retained rows are always better to show than a spinner.
    pub is_initial_load: bool,

    /// The surfaced fetch error, if the last fetch failed.
    pub error: Option<&'a FetchError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Connection;

    fn committed_state(items: usize, has_next: bool, cursor: Cursor) -> PagerState<u32> {
        let mut state = PagerState::new(10);
        state.cursor = cursor.clone();
        state.committed_cursor = cursor;
        state.cumulative_count = items as u64;
        state.stabilizer.commit(Connection {
            items: (0..items as u32).collect(),
            page_info: PageInfo {
                has_next_page: has_next,
                has_previous_page: false,
                start_cursor: Some("s".into()),
                end_cursor: Some("e".into()),
            },
            total_count: Some(25),
        });
        state
    }

    #[test]
    fn fresh_state_view_is_empty_and_idle() {
        let state: PagerState<u32> = PagerState::new(10);
        let view = state.view();
        assert!(view.items.is_empty());
        assert_eq!(view.range, ItemRange { start: 0, end: 0, total: None });
        assert!(!view.can_load_next);
        assert!(!view.can_load_previous);
        assert!(!view.is_loading);
        assert!(!view.is_initial_load);
        assert!(view.error.is_none());
    }

    #[test]
    fn can_load_next_requires_end_cursor_not_yet_taken() {
        let mut state = committed_state(10, true, None);
        assert!(state.view().can_load_next);

        // Cursor already moved onto the end cursor: the advance is pending.
        state.cursor = Some("e".into());
        assert!(!state.view().can_load_next);
    }

    #[test]
    fn can_load_previous_ignores_server_flag_when_history_present() {
        let mut state = committed_state(10, true, Some("c1".into()));
        state.history.push(None, 1);
        // Server said has_previous_page: false; history wins.
        assert!(state.view().can_load_previous);
    }

    #[test]
    fn can_load_previous_with_lost_history_but_deep_cursor() {
        let state = committed_state(10, true, Some("c3".into()));
        assert!(state.history.is_empty());
        // Degrades to a first-page jump, but the control stays enabled.
        assert!(state.view().can_load_previous);
    }

    #[test]
    fn initial_load_flag_only_before_first_commit() {
        let mut state: PagerState<u32> = PagerState::new(10);
        state.in_flight = Some(1);
        assert!(state.view().is_initial_load);

        let mut state = committed_state(10, true, None);
        state.in_flight = Some(2);
        let view = state.view();
        assert!(view.is_loading);
        assert!(!view.is_initial_load);
        assert_eq!(view.items.len(), 10);
    }
}
