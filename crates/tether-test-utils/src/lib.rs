//! Test utilities for Tether development.
//!
//! [`RefLedger`] hands out [`TrackedHandle`]s whose clones and drops are
//! counted per object, so tests can check that a container acquired and
//! released exactly as often as it should. The objects behind the
//! handles also record every [`Signal`] broadcast to them.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod ledger;
mod tracked;

pub use ledger::{ObjectId, RefLedger, RefTally};
pub use tracked::{Signal, TrackedHandle, TrackedObject};
