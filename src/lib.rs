//! wayfarer-rs
//! ===========
//!
//! Workspace host for [`wayfarer_core`]. Re-exports the core so the demos can
//! be written against a single crate name.
pub use wayfarer_core::*;
