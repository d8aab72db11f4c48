//! # park-prune
//!
//! One-shot removal of known-bad park entries from the generated
//! `texas-parks.ts` data module.
//!
//! Entries are located by their `"id"` field with regular expressions; the
//! file is never parsed structurally. See the [prune] module for the
//! removal rules and the read-modify-write cycle.

pub mod prune;
