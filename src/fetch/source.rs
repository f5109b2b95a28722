//! The page source abstraction.
//!
//! This module defines the [`PageSource`] trait, the engine's one external
//! collaborator: something that can asynchronously turn fetch parameters
//! into a connection. The engine does not care whether that is a GraphQL
//! endpoint, a REST adapter, or an in-memory vector; it only consumes the
//! contract.
//!
//! # Design Philosophy
//!
//! The trait is a single method because the engine needs exactly one
//! capability. Timeouts, authentication, and retry/backoff policies are the
//! implementor's concern; the engine's own recovery model is limited to
//! surfacing errors and re-issuing idempotent fetches on demand.

use crate::domain::FetchResult;
use crate::fetch::request::FetchParams;
use futures_util::future::BoxFuture;

/// Abstraction over cursor-paginated data sources.
///
/// A fetch may suspend indefinitely; the engine never blocks on it and never
/// cancels it. If the engine moves on before a fetch resolves, the late
/// resolution is simply discarded by the reducer's staleness guard, so
/// implementations are free to complete every request they start.
///
/// # Implementations
///
/// - [`MemorySource`](crate::fetch::MemorySource): in-memory rows with
///   search, sort, and offset-encoded cursors (tests and demos)
///
/// # Examples
///
/// ```
/// use backpager::domain::{Connection, FetchResult};
/// use backpager::fetch::{FetchParams, PageSource};
/// use futures_util::future::{self, BoxFuture};
///
/// struct SinglePage;
///
/// impl PageSource<String> for SinglePage {
///     fn fetch_page(&mut self, _params: FetchParams) -> BoxFuture<'_, FetchResult<String>> {
///         Box::pin(future::ready(Ok(Connection {
///             items: vec!["only row".to_string()],
///             page_info: Default::default(),
///             total_count: Some(1),
///         })))
///     }
/// }
/// ```
pub trait PageSource<T> {
    /// Fetches one page described by `params`.
    ///
    /// Returns the connection for that position of the filtered, ordered
    /// result set, or a [`FetchError`](crate::domain::FetchError) describing
    /// why it could not be produced. A cursor the source no longer
    /// recognizes should be a `Server` error, not a panic or an empty page.
    fn fetch_page(&mut self, params: FetchParams) -> BoxFuture<'_, FetchResult<T>>;
}
