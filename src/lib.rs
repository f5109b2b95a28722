//! Backpager: a cursor-based pagination engine for forward-only sources.
//!
//! Backpager coordinates page navigation, search, and sorting against a data
//! source that only exposes forward cursors (the Relay connection
//! convention), while keeping three things correct that naive
//! implementations get wrong:
//!
//! - **Backward navigation** without a backward cursor, via an explicit
//!   history stack of departure points
//! - **Exact display ranges** ("11–20 of 143") that survive short last
//!   pages and backward walks without drifting
//! - **No flicker**: the last successfully loaded page stays visible while a
//!   refetch is in flight or after a failed fetch, and a slow, superseded
//!   response can never overwrite newer state
//!
//! # Architecture
//!
//! The engine is a pure reducer; everything effectful sits behind explicit
//! seams:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host / UI binding (or fetch::PagerDriver)          │  ← dispatches events,
//! └─────────────────────────────────────────────────────┘    executes effects
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  State machine (pager/)                             │  ← handle_event:
//! │  - PagerState + PagerView                           │    (state, event)
//! │  - CursorHistory, range, DataStabilizer             │      -> effects
//! │  - SearchCoordinator / debounce                     │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────┐             ┌───────────────────┐
//! │ Domain (domain/)  │             │ Fetch seam        │
//! │ - Connection,     │             │ (fetch/)          │
//! │   PageInfo, Cursor│             │ - FetchRequest    │
//! │ - SortState       │             │ - PageSource      │
//! │ - errors          │             │ - MemorySource    │
//! └───────────────────┘             └───────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`pager`]: The reducer, state container, and coordinators
//! - [`domain`]: Connection model, sort state, error types
//! - [`fetch`]: Request protocol, the [`PageSource`] trait, driver
//! - [`observability`]: Optional tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use backpager::{Event, MemorySource, PagerConfig, PagerDriver};
//! use futures_util::FutureExt;
//! use serde_json::json;
//!
//! let rows = (0..25).map(|i| json!({"name": format!("user-{i:02}")})).collect();
//! let config = PagerConfig::default();
//! let mut driver = PagerDriver::new(&config, Box::new(MemorySource::new(rows)));
//!
//! // The in-memory source resolves synchronously.
//! driver.start().now_or_never().unwrap();
//! assert_eq!(driver.view().range.start, 1);
//! assert_eq!(driver.view().range.end, 10);
//!
//! driver.dispatch(Event::NextPageRequested).now_or_never().unwrap();
//! assert_eq!(driver.view().range.start, 11);
//! assert_eq!(driver.view().range.end, 20);
//! ```
//!
//! # Key Design Decisions
//!
//! ## History-driven backward navigation
//!
//! Cursor-only backends cannot answer "what comes before this cursor?", and
//! their `hasPreviousPage` is unreliable for arbitrary cursors. The engine
//! therefore records every forward departure itself and ORs the server flag
//! with its own history. The one unavoidable degradation: when history is
//! lost (a reloaded view that kept only its cursor), going back restarts at
//! the first page.
//!
//! ## Stale responses are dropped, not cancelled
//!
//! Navigation never waits for an in-flight fetch. Each fetch carries a
//! generation tag and its exact parameters; a resolution is committed only
//! if both still match, so out-of-order completions are harmless and no
//! cancellation machinery is needed.
//!
//! ## The last good page is sacred
//!
//! Neither starting a new fetch nor a fetch failure clears the retained
//! connection. The UI always has the most recent successful page to render,
//! and a dedicated loading state exists only before the first success.

pub mod domain;
pub mod fetch;
pub mod observability;
pub mod pager;

pub use domain::{
    Connection, Cursor, FetchError, FetchResult, OrderDescriptor, PageInfo, PagerError, Result,
    SortCoordinator, SortDirection, SortState,
};
pub use fetch::{FetchParams, FetchRequest, MemorySource, PageSource, PagerDriver};
pub use pager::{
    handle_event, CursorHistory, DataStabilizer, Effect, Event, ItemRange, PagerState, PagerView,
    SearchCoordinator,
};

use serde::Deserialize;

/// Engine configuration for one listing session.
///
/// Loadable from TOML for hosts that keep listing defaults in a file; every
/// field has a default, so a partial (or empty) document is valid.
///
/// # Example
///
/// ```
/// use backpager::PagerConfig;
///
/// let config = PagerConfig::from_toml_str(r#"
///     page_size = 25
/// "#).unwrap();
/// assert_eq!(config.page_size, 25);
/// assert_eq!(config.debounce_ms, 300);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagerConfig {
    /// Items requested per page. Must be at least 1. Default: 10
    pub page_size: usize,

    /// Quiet period before raw search input commits, in milliseconds.
    ///
    /// Rapid typing collapses into one commit per pause of this length.
    /// Default: 300
    pub debounce_ms: u64,

    /// Tracing filter directive for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Unset means `"info"`.
    pub trace_level: Option<String>,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            debounce_ms: 300,
            trace_level: None,
        }
    }
}

impl PagerConfig {
    /// Validates the configuration, consuming and returning it.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Config`] if `page_size` is zero.
    pub fn validated(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(PagerError::Config("page_size must be at least 1".into()));
        }
        Ok(self)
    }

    /// Parses and validates a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Config`] if the document is malformed, contains
    /// unknown fields, or fails validation.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(document).map_err(|e| PagerError::Config(e.to_string()))?;
        config.validated()
    }

    /// Loads and validates a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Io`] if the file cannot be read, or
    /// [`PagerError::Config`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let document = std::fs::read_to_string(path)?;
        Self::from_toml_str(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = PagerConfig::default().validated().unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.debounce_ms, 300);
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let config = PagerConfig { page_size: 0, ..PagerConfig::default() };
        assert!(matches!(config.validated(), Err(PagerError::Config(_))));
        assert!(PagerConfig::from_toml_str("page_size = 0").is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = PagerConfig::from_toml_str("debounce_ms = 150").unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.debounce_ms, 150);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(PagerConfig::from_toml_str("page_sice = 10").is_err());
    }

    #[test]
    fn config_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 50\ntrace_level = \"debug\"").unwrap();

        let config = PagerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = PagerConfig::from_file("/nonexistent/backpager.toml");
        assert!(matches!(result, Err(PagerError::Io(_))));
    }
}
