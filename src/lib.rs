//! daylist — a local-first to-do store.
//!
//! The core is a single-threaded state container: a normalized task model,
//! an action set that is the entire write surface, selectors for the smart
//! list pages, pure floating-menu geometry, and a lenient persistence
//! round-trip to a single durable entry. The `dl` binary is a thin CLI
//! collaborator driving the same dispatch/select interface a UI would.

pub mod bootstrap;
pub mod cli;
pub mod geometry;
pub mod io;
pub mod model;
pub mod ops;
pub mod select;
pub mod store;

pub use ops::{Action, ActionError};
pub use store::{Store, StoreError};
