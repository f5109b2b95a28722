//! Side effects requested by the pagination reducer.
//!
//! The reducer never performs I/O. Processing an event returns a list of
//! [`Effect`] values describing what the host should do next; the host (or
//! the bundled [`PagerDriver`](crate::fetch::PagerDriver)) executes them and
//! feeds resolutions back in as events. This keeps the whole state machine
//! synchronous and testable without a UI framework or a transport.

use crate::fetch::FetchRequest;

/// An imperative command produced by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the described fetch against the page source.
    ///
    /// The host must eventually feed the outcome back as
    /// [`Event::FetchResolved`](crate::pager::Event::FetchResolved) carrying
    /// this same request, even if a newer fetch was issued in the meantime;
    /// the reducer sorts out staleness itself.
    Fetch(FetchRequest),
}
