//! Observability support.
//!
//! The crate instruments itself with `tracing` throughout: reducer
//! transitions, fetch issuance and commits, stale-response discards, and
//! search commits all emit structured events. This module only provides the
//! optional subscriber setup; hosts with their own telemetry pipeline ignore
//! it and attach whatever layers they want.

pub mod init;

pub use init::init_tracing;
