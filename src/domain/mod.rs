//! Domain layer for the pagination engine.
//!
//! This module contains the core domain types the rest of the crate is built
//! on, independent of the state machine or any fetch transport. It follows
//! domain-driven design principles by keeping the wire-adjacent vocabulary
//! (connections, cursors, sorts, errors) isolated from engine mechanics.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`connection`]: Relay-convention connection model (cursors, page info)
//! - [`sort`]: Single-field sort state and the sort coordinator

pub mod connection;
pub mod error;
pub mod sort;

pub use connection::{Connection, Cursor, PageInfo};
pub use error::{FetchError, FetchResult, PagerError, Result};
pub use sort::{OrderDescriptor, SortCoordinator, SortDirection, SortState};
