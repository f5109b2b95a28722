//! The fetch seam: request protocol, source abstraction, and driver.
//!
//! Everything that crosses the boundary between the pure state machine and
//! the outside world lives here. The reducer emits tagged [`FetchRequest`]s;
//! a [`PageSource`] turns their parameters into connections; the
//! [`PagerDriver`] closes the loop for hosts that do not run their own
//! effect executor.
//!
//! # Organization
//!
//! - [`request`]: [`FetchParams`] and the generation-tagged [`FetchRequest`]
//! - [`source`]: The [`PageSource`] collaborator trait
//! - [`memory`]: [`MemorySource`], an in-memory reference source
//! - [`driver`]: [`PagerDriver`], the bundled event/effect loop

pub mod driver;
pub mod memory;
pub mod request;
pub mod source;

pub use driver::PagerDriver;
pub use memory::MemorySource;
pub use request::{FetchParams, FetchRequest};
pub use source::PageSource;
