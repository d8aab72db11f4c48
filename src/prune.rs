//! Entry removal over the raw text of the parks data module.
//!
//! The module treats the file as an opaque string buffer. Each target
//! identifier is located with a regex anchored on its `"id"` field, the
//! matched span is cut out of the buffer, and comma artifacts left behind
//! are collapsed in a final cleanup pass. [`runner::prune_file`] drives the
//! full read → remove × N → cleanup → write cycle.

pub mod document;
pub mod runner;
pub mod targets;

pub use document::{Document, RemovedEntry};
pub use runner::{prune_file, PruneError, PruneOptions, PruneSummary};
pub use targets::{Target, DEFAULT_DATA_FILE, DEFAULT_TARGETS};
