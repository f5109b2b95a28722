//! Error types for the pagination engine.
//!
//! This module defines two error families with distinct propagation rules:
//! [`FetchError`] for failures reported by the page source collaborator, and
//! [`PagerError`] for library-level failures such as invalid configuration.
//! Both are implemented with the `thiserror` crate for automatic `Error` trait
//! implementation.
//!
//! A `FetchError` is surfaced verbatim to the caller through the pager view
//! and never clears the last successfully loaded page. A stale fetch
//! resolution is not an error at all: it is discarded silently inside the
//! reducer and never reaches either type.

use thiserror::Error;

/// A failure reported by the page source while loading a page.
///
/// Fetch errors are surfaced verbatim through the pager view and leave the
/// previously rendered page intact. Recovery is manual: re-issuing the same
/// operation (retry, or any navigation event) is idempotent and safe.
///
/// A cursor the source rejects as expired or invalid should be reported as
/// [`FetchError::Server`]; the recommended recovery is navigating to the
/// first page, which discards the rejected cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a usable response.
    ///
    /// Transport-level failures: connection refused, timeout, DNS. The string
    /// carries the underlying transport's description.
    #[error("network error: {0}")]
    Network(String),

    /// The source answered, but with an error payload.
    ///
    /// Covers application-level rejections such as an expired cursor, a field
    /// the source cannot sort by, or a GraphQL error payload. The string
    /// carries the source's message.
    #[error("server error: {0}")]
    Server(String),
}

/// The main error type for library-level pager operations.
///
/// Distinct from [`FetchError`]: these errors occur before any fetch is
/// issued, typically while building or loading configuration.
#[derive(Debug, Error)]
pub enum PagerError {
    /// Configuration is invalid or could not be parsed.
    ///
    /// Occurs when a configuration value is out of range (for example a zero
    /// page size) or a TOML configuration file is malformed. The string
    /// describes the specific problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, currently only
    /// reading configuration files. Automatically converts from
    /// `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for library-level pager operations.
pub type Result<T> = std::result::Result<T, PagerError>;

/// The outcome of a single page fetch: a connection on success, a
/// [`FetchError`] on failure.
pub type FetchResult<T> = std::result::Result<super::Connection<T>, FetchError>;
