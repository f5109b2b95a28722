//! Thin adapter wiring the reducer to a page source.
//!
//! [`PagerDriver`] is the bundled host for the state machine: it owns a
//! [`PagerState`], the search and sort coordinators, and a boxed
//! [`PageSource`], dispatches events through the reducer, executes the fetch
//! effects the reducer returns, and feeds resolutions back in. It contains no pagination
//! logic of its own; anything with a policy lives in the reducer, which is
//! what keeps UI bindings interchangeable.
//!
//! Hosts with their own effect loop (a UI framework binding, typically) can
//! skip the driver entirely and call
//! [`handle_event`](crate::pager::handle_event) themselves.

use crate::domain::{SortCoordinator, SortState};
use crate::pager::events::Event;
use crate::pager::effects::Effect;
use crate::pager::handler;
use crate::pager::search::SearchCoordinator;
use crate::pager::state::{PagerState, PagerView};
use crate::fetch::source::PageSource;
use crate::PagerConfig;
use std::time::Instant;

/// Owns one listing session end to end: state, search and sort coordination,
/// source.
pub struct PagerDriver<T> {
    state: PagerState<T>,
    search: SearchCoordinator,
    sort: SortCoordinator,
    source: Box<dyn PageSource<T>>,
}

impl<T> PagerDriver<T> {
    /// Creates a driver for a fresh listing session.
    ///
    /// Nothing is fetched yet; call [`start`](Self::start) to issue the
    /// initial load.
    #[must_use]
    pub fn new(config: &PagerConfig, source: Box<dyn PageSource<T>>) -> Self {
        Self {
            state: PagerState::new(config.page_size),
            search: SearchCoordinator::new(config.debounce_ms),
            sort: SortCoordinator::new(),
            source,
        }
    }

    /// Issues the initial first-page load.
    pub async fn start(&mut self) {
        self.dispatch(Event::FirstPageRequested).await;
    }

    /// Dispatches one event and executes every effect it produces.
    ///
    /// Fetch effects are awaited in place and their outcomes fed back into
    /// the reducer, so when this returns the state reflects the resolved
    /// fetch (or its surfaced error). Out-of-order resolution can only
    /// happen in hosts that run fetches concurrently themselves; those feed
    /// `Event::FetchResolved` in directly and the reducer's staleness guard
    /// does the rest.
    pub async fn dispatch(&mut self, event: Event<T>) {
        let mut effects = handler::handle_event(&mut self.state, event);
        while let Some(effect) = effects.pop() {
            match effect {
                Effect::Fetch(request) => {
                    let outcome = self.source.fetch_page(request.params.clone()).await;
                    effects.extend(handler::handle_event(
                        &mut self.state,
                        Event::FetchResolved { request, outcome },
                    ));
                }
            }
        }
    }

    /// Feeds raw search input at `now`, restarting the debounce window.
    ///
    /// Synchronous and cheap; call it on every keystroke.
    pub fn search_input(&mut self, text: &str, now: Instant) {
        self.search.input(text, now);
    }

    /// Polls the debounce window at `now`, dispatching a commit if one fired.
    ///
    /// Call this from the host's timer or event loop. Rapid typing collapses
    /// into a single committed term per pause, and a pause that leaves the
    /// term unchanged dispatches nothing.
    pub async fn poll_search(&mut self, now: Instant) {
        if let Some(term) = self.search.poll_commit(now) {
            self.dispatch(Event::SearchCommitted(term)).await;
        }
    }

    /// Commits the raw search input immediately, bypassing the debounce.
    pub async fn flush_search(&mut self) {
        if let Some(term) = self.search.flush() {
            self.dispatch(Event::SearchCommitted(term)).await;
        }
    }

    /// Replaces the active sort, or clears it with `None`.
    ///
    /// The coordinator filters out no-op updates, so re-applying the current
    /// sort dispatches nothing and keeps the navigation position.
    pub async fn set_sort(&mut self, sort: Option<SortState>) {
        if self.sort.set(sort) {
            let active = self.sort.active().cloned();
            self.dispatch(Event::SortChanged(active)).await;
        }
    }

    /// Cycles the sort on `field` the way a column-header click does:
    /// inactive becomes ascending, ascending becomes descending, and another
    /// field's sort is replaced.
    pub async fn toggle_sort(&mut self, field: &str) {
        if self.sort.toggle(field) {
            let active = self.sort.active().cloned();
            self.dispatch(Event::SortChanged(active)).await;
        }
    }

    /// The underlying state, for read-only inspection.
    #[must_use]
    pub fn state(&self) -> &PagerState<T> {
        &self.state
    }

    /// The search coordinator, for rendering the raw input.
    #[must_use]
    pub fn search(&self) -> &SearchCoordinator {
        &self.search
    }

    /// The sort coordinator, for rendering the active sort.
    #[must_use]
    pub fn sort(&self) -> &SortCoordinator {
        &self.sort
    }

    /// Computes the current renderable view.
    #[must_use]
    pub fn view(&self) -> PagerView<'_, T> {
        self.state.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FetchError, SortDirection};
    use crate::fetch::memory::MemorySource;
    use futures_util::FutureExt;
    use serde_json::{json, Value};
    use std::time::Duration;

    fn driver_over(count: usize) -> PagerDriver<Value> {
        let rows = (0..count)
            .map(|i| json!({"name": format!("user-{i:02}")}))
            .collect();
        let config = PagerConfig { page_size: 10, ..PagerConfig::default() };
        PagerDriver::new(&config, Box::new(MemorySource::new(rows)))
    }

    fn run(fut: impl std::future::Future<Output = ()>) {
        fut.now_or_never().expect("memory source resolves synchronously");
    }

    #[test]
    fn start_loads_first_page() {
        let mut driver = driver_over(25);
        run(driver.start());

        let view = driver.view();
        assert_eq!(view.items.len(), 10);
        assert_eq!((view.range.start, view.range.end), (1, 10));
        assert_eq!(view.total_count, Some(25));
        assert!(!view.is_loading);
    }

    #[test]
    fn debounced_search_commits_once_and_resets() {
        let mut driver = driver_over(25);
        run(driver.start());
        run(driver.dispatch(Event::NextPageRequested));
        assert_eq!(driver.state().history_depth(), 1);

        let start = Instant::now();
        driver.search_input("user-0", start);
        driver.search_input("user-01", start + Duration::from_millis(100));

        // Inside the window: nothing dispatched yet.
        run(driver.poll_search(start + Duration::from_millis(200)));
        assert_eq!(driver.state().search_term(), "");

        run(driver.poll_search(start + Duration::from_millis(500)));
        assert_eq!(driver.state().search_term(), "user-01");
        assert_eq!(driver.state().history_depth(), 0);
        assert_eq!(driver.view().range.total, Some(1));
    }

    #[test]
    fn set_sort_resets_only_on_actual_change() {
        let mut driver = driver_over(25);
        run(driver.start());
        run(driver.set_sort(Some(SortState::descending("name"))));
        assert_eq!(driver.view().items[0]["name"], "user-24");
        assert_eq!(driver.sort().active(), Some(&SortState::descending("name")));

        run(driver.dispatch(Event::NextPageRequested));
        assert_eq!(driver.state().history_depth(), 1);

        // Re-applying the identical sort must not reset the position.
        run(driver.set_sort(Some(SortState::descending("name"))));
        assert_eq!(driver.state().history_depth(), 1);

        // Toggling the active field flips the direction and resets.
        run(driver.toggle_sort("name"));
        assert_eq!(
            driver.sort().active().map(|s| s.direction),
            Some(SortDirection::Ascending),
        );
        assert_eq!(driver.state().history_depth(), 0);
        assert_eq!(driver.view().items[0]["name"], "user-00");
    }

    #[test]
    fn error_keeps_previous_rows_until_retry_succeeds() {
        let rows: Vec<Value> = (0..25).map(|i| json!({"name": format!("u{i}")})).collect();
        let config = PagerConfig::default();
        let mut source = MemorySource::new(rows);
        source.fail_next(FetchError::Network("down".into()));

        // First load fails: nothing to show, error surfaced.
        let mut driver = PagerDriver::new(&config, Box::new(source));
        run(driver.start());
        assert!(driver.view().error.is_some());
        assert!(driver.view().items.is_empty());

        // Retry succeeds and clears the error.
        run(driver.dispatch(Event::Retry));
        let view = driver.view();
        assert!(view.error.is_none());
        assert_eq!(view.items.len(), 10);
    }
}
