//! The pagination reducer: event in, state mutation, effects out.
//!
//! This module implements every pagination operation as a transition of the
//! form `(state, event) -> effects`. The reducer performs no I/O and never
//! blocks; a navigation that needs data returns a
//! [`Effect::Fetch`](crate::pager::Effect) for the host to execute, and the
//! eventual outcome re-enters as [`Event::FetchResolved`].
//!
//! # Guards
//!
//! Operations that cannot apply are idempotent no-ops, not errors: advancing
//! past the last page, going back from the first, re-setting the current
//! page size, or re-committing the current search term all return no effects
//! and leave the state untouched.
//!
//! # Stale responses
//!
//! There is no request queuing. A navigation issued while a fetch is in
//! flight supersedes the outstanding request's eventual effect: every fetch
//! carries a generation tag plus its exact parameters, and a resolution is
//! committed only when both still match the state. Anything else is dropped
//! silently, so a slow response can never overwrite state produced by a more
//! recent request.

use crate::fetch::FetchRequest;
use crate::pager::events::Event;
use crate::pager::effects::Effect;
use crate::pager::range;
use crate::pager::state::PagerState;

/// Processes one event, mutating the state and returning effects to execute.
///
/// This is the only mutation path for [`PagerState`]. Hosts that embed the
/// engine directly call this from their update loop; the bundled
/// [`PagerDriver`](crate::fetch::PagerDriver) wraps it together with effect
/// execution.
///
/// # Examples
///
/// ```
/// use backpager::pager::{handle_event, Effect, Event, PagerState};
///
/// let mut state: PagerState<String> = PagerState::new(10);
/// let effects = handle_event(&mut state, Event::FirstPageRequested);
///
/// // The initial load is a fetch at the null cursor.
/// assert_eq!(effects.len(), 1);
/// let Effect::Fetch(request) = &effects[0];
/// assert!(request.params.cursor.is_none());
/// ```
pub fn handle_event<T>(state: &mut PagerState<T>, event: Event<T>) -> Vec<Effect> {
    let _span = tracing::debug_span!("handle_event", event = event.name()).entered();

    match event {
        Event::NextPageRequested => next_page(state),
        Event::PreviousPageRequested => previous_page(state),
        Event::FirstPageRequested => first_page(state),
        Event::SearchCommitted(term) => search_committed(state, term),
        Event::SortChanged(sort) => {
            if sort == state.sort {
                tracing::debug!("sort unchanged, skipping reset");
                return vec![];
            }
            tracing::debug!(sort = ?sort, "sort changed, resetting pagination");
            state.sort = sort;
            reset_position(state);
            vec![issue_fetch(state)]
        }
        Event::PageSizeChanged(page_size) => {
            if page_size == state.page_size {
                tracing::debug!(page_size, "page size unchanged, skipping refetch");
                return vec![];
            }
            if page_size == 0 {
                tracing::warn!("ignoring zero page size");
                return vec![];
            }
            // Position is deliberately preserved: changing how many rows fit
            // on screen must not discard navigation context.
            tracing::debug!(old = state.page_size, new = page_size, "page size changed");
            state.page_size = page_size;
            vec![issue_fetch(state)]
        }
        Event::Retry => {
            if state.in_flight.is_some() {
                tracing::debug!("retry ignored, fetch already in flight");
                return vec![];
            }
            if state.error.is_none() && !state.stabilizer.has_loaded() {
                tracing::debug!("retry ignored, nothing to retry");
                return vec![];
            }
            tracing::debug!("retrying fetch at current parameters");
            vec![issue_fetch(state)]
        }
        Event::FetchResolved { request, outcome } => fetch_resolved(state, request, outcome),
    }
}

fn next_page<T>(state: &mut PagerState<T>) -> Vec<Effect> {
    let Some(info) = state.stabilizer.page_info() else {
        tracing::debug!("next page ignored, nothing loaded yet");
        return vec![];
    };
    if !info.has_next_page {
        tracing::debug!("next page ignored, already on last page");
        return vec![];
    }
    let Some(end_cursor) = info.end_cursor.clone() else {
        tracing::debug!("next page ignored, source provided no end cursor");
        return vec![];
    };
    if state.cursor.as_deref() == Some(end_cursor.as_str()) {
        // The advance to that cursor is already pending; a repeated request
        // while the fetch is in flight must not push history twice.
        tracing::debug!("next page ignored, advance already pending");
        return vec![];
    }

    let range_start = range::compute(
        state.cumulative_count,
        state.stabilizer.items_on_page(),
        None,
    )
    .start;

    // The departure point is the committed page, not `cursor`: a pending
    // navigation may already have moved `cursor` elsewhere, and its eventual
    // resolution will be dropped as stale.
    state.history.push(state.committed_cursor.clone(), range_start);
    state.base_count = state.cumulative_count;
    state.cursor = Some(end_cursor);

    tracing::debug!(
        depth = state.history.depth(),
        cursor = ?state.cursor,
        "navigating forward"
    );
    vec![issue_fetch(state)]
}

fn previous_page<T>(state: &mut PagerState<T>) -> Vec<Effect> {
    if let Some(entry) = state.history.pop() {
        // The recorded range start restores the count of items before the
        // destination page exactly, even when the page being left was a
        // short final page.
        state.base_count = entry.range_start.saturating_sub(1);
        state.cursor = entry.cursor;
        tracing::debug!(
            depth = state.history.depth(),
            cursor = ?state.cursor,
            "navigating backward via history"
        );
        return vec![issue_fetch(state)];
    }

    if state.cursor.is_some() {
        // History was lost (e.g. the view reloaded mid-listing) but the
        // cursor says we are not on the first page. The only server-side
        // fallback a forward-only source allows is starting over.
        tracing::debug!("history empty with non-null cursor, degrading to first page");
        return first_page(state);
    }

    tracing::debug!("previous page ignored, already on first page");
    vec![]
}

fn first_page<T>(state: &mut PagerState<T>) -> Vec<Effect> {
    reset_position(state);
    vec![issue_fetch(state)]
}

fn search_committed<T>(state: &mut PagerState<T>, term: String) -> Vec<Effect> {
    if term == state.search_term {
        tracing::debug!("search term unchanged, skipping reset");
        return vec![];
    }
    tracing::debug!(term = %term, "search term changed, resetting pagination");
    state.search_term = term;
    reset_position(state);
    vec![issue_fetch(state)]
}

fn fetch_resolved<T>(
    state: &mut PagerState<T>,
    request: FetchRequest,
    outcome: crate::domain::FetchResult<T>,
) -> Vec<Effect> {
    let current = state.current_params();
    if state.in_flight != Some(request.generation) || request.params != current {
        // A superseded request resolved late. Dropping it here is the whole
        // stale-response guard; nothing is surfaced.
        tracing::debug!(
            resolved_generation = request.generation,
            outstanding = ?state.in_flight,
            "stale fetch resolution discarded"
        );
        return vec![];
    }

    state.in_flight = None;
    match outcome {
        Ok(connection) => {
            state.error = None;
            state.committed_cursor = request.params.cursor.clone();
            state.cumulative_count = state.base_count + connection.len() as u64;
            tracing::debug!(
                generation = request.generation,
                items = connection.len(),
                total = ?connection.total_count,
                cumulative = state.cumulative_count,
                "fetch committed"
            );
            state.stabilizer.commit(connection);
        }
        Err(error) => {
            // The retained page stays visible; only the error is surfaced.
            tracing::debug!(generation = request.generation, error = %error, "fetch failed");
            state.error = Some(error);
        }
    }
    vec![]
}

/// Clears cursor, history, and both counters: the shared reset used by
/// first-page jumps, search changes, and sort changes.
fn reset_position<T>(state: &mut PagerState<T>) {
    state.cursor = None;
    state.history.reset();
    state.base_count = 0;
    state.cumulative_count = 0;
}

/// Tags and records a fetch at the current parameters.
fn issue_fetch<T>(state: &mut PagerState<T>) -> Effect {
    state.generation += 1;
    state.in_flight = Some(state.generation);
    let request = FetchRequest {
        generation: state.generation,
        params: state.current_params(),
    };
    tracing::debug!(
        generation = request.generation,
        cursor = ?request.params.cursor,
        page_size = request.params.page_size,
        search = %request.params.search_term,
        sort = ?request.params.sort,
        "issuing fetch"
    );
    Effect::Fetch(request)
}
