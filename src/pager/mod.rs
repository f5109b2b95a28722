//! The pagination state machine.
//!
//! This module is the engine's core: a pure reducer over [`PagerState`] with
//! explicit `(state, event) -> effects` transitions. UI-framework bindings
//! stay thin adapters that dispatch [`Event`]s and render
//! [`PagerView`]s; none of the state-machine logic lives in them, so the
//! whole machine is testable without a UI framework.
//!
//! # Organization
//!
//! - [`state`]: The [`PagerState`] container and [`PagerView`] projection
//! - [`events`] / [`effects`]: The reducer's input and output vocabulary
//! - [`handler`]: [`handle_event`], the only mutation path
//! - [`history`]: Cursor stack enabling backward navigation
//! - [`range`]: 1-based display range computation
//! - [`stabilizer`]: Last-good page retention across refetches
//! - [`search`]: Debounced search input coordination

pub mod effects;
pub mod events;
pub mod handler;
pub mod history;
pub mod range;
pub mod search;
pub mod stabilizer;
pub mod state;

pub use effects::Effect;
pub use events::Event;
pub use handler::handle_event;
pub use history::{CursorHistory, HistoryEntry};
pub use range::ItemRange;
pub use search::{Debouncer, SearchCoordinator};
pub use stabilizer::DataStabilizer;
pub use state::{PagerState, PagerView};
