//! wayfarer-cli
//! ============
//!
//! Command-line interface for the `wayfarer-core` destination search.
//!
//! This crate primarily provides a binary (`wayfarer`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! wayfarer --help
//! wayfarer stats
//! wayfarer search beaches
//! wayfarer search tokyo --json
//! wayfarer time "Taj Mahal, India"
//! wayfarer time "Kyoto, Japan" --country Japan
//! wayfarer contact --name Ada --email ada@example.com --message "See you in Kyoto!"
//! ```
//!
//! For programmatic access use the [`wayfarer-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
