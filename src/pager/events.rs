//! Events driving the pagination state machine.
//!
//! Every external stimulus the engine reacts to is an [`Event`]: user
//! navigation, committed search terms, sort and page-size updates, and
//! resolved fetches. Events are processed one at a time by
//! [`handle_event`](crate::pager::handle_event), which mutates the state and
//! returns the side effects to execute. There is no other mutation path.

use crate::domain::{FetchResult, SortState};
use crate::fetch::FetchRequest;

/// A stimulus for the pagination reducer.
///
/// Navigation variants carry no payload: they operate on the engine's current
/// position. The guards each operation applies (idempotent no-ops, resets,
/// history bookkeeping) live in the reducer, not in the caller.
#[derive(Debug)]
pub enum Event<T> {
    /// Advance to the next page, if the current page info allows it.
    NextPageRequested,

    /// Return to the previous page via history, falling back to the first
    /// page when the history was lost (e.g. after a view reload).
    PreviousPageRequested,

    /// Jump to the first page, clearing history and the cumulative count.
    FirstPageRequested,

    /// A debounce-committed search term.
    ///
    /// Emitted by [`SearchCoordinator`](crate::pager::SearchCoordinator) when
    /// the raw input survives the quiet period with an actual change. An
    /// unchanged term is a no-op; a changed one resets pagination before the
    /// filtered fetch is issued.
    SearchCommitted(String),

    /// A new sort selection, or `None` to clear sorting.
    ///
    /// A changed sort resets cursor, history, and cumulative count exactly
    /// like a first-page jump, but leaves the committed search term alone.
    SortChanged(Option<SortState>),

    /// A new page size.
    ///
    /// An unchanged size is a no-op, guarding against redundant refetch loops
    /// from layout-measurement callers. A changed size refetches at the
    /// current cursor without discarding navigation context.
    PageSizeChanged(usize),

    /// Re-issue a fetch for the current parameters.
    ///
    /// The manual recovery path after a surfaced fetch error. A no-op while a
    /// fetch is already in flight.
    Retry,

    /// A fetch completed, successfully or not.
    ///
    /// The reducer commits the outcome only if `request` still matches the
    /// engine's outstanding generation and current parameters; stale
    /// resolutions are dropped without touching state.
    FetchResolved {
        /// The request this outcome belongs to, as originally issued.
        request: FetchRequest,

        /// The connection, or the error to surface.
        outcome: FetchResult<T>,
    },
}

impl<T> Event<T> {
    /// Short variant name for tracing, independent of the item type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NextPageRequested => "next_page_requested",
            Self::PreviousPageRequested => "previous_page_requested",
            Self::FirstPageRequested => "first_page_requested",
            Self::SearchCommitted(_) => "search_committed",
            Self::SortChanged(_) => "sort_changed",
            Self::PageSizeChanged(_) => "page_size_changed",
            Self::Retry => "retry",
            Self::FetchResolved { .. } => "fetch_resolved",
        }
    }
}
