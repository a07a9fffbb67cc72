//! Growable, reference-owning sequence container for shared handles.
//!
//! [`ManagedArray`] is a contiguous array of [`RefHandle`]s that acquires
//! a reference when an element enters and releases it when the element
//! leaves. It trades the generality of `Vec` for an API shaped around
//! identity: lookups, removals and set differences compare handles by
//! the instance they point at.
//!
//! # Growth
//!
//! Capacity doubles (an empty allocation grows to one slot) and may be
//! capped with [`ArrayConfig::max_capacity`]. Only the `*_resizing`
//! operations, [`Extend`] and explicit
//! [`grow_capacity`](ManagedArray::grow_capacity) grow the array; plain
//! [`append`](ManagedArray::append) requires a free slot.
//!
//! # Ordering
//!
//! Every operation preserves relative order except
//! [`fast_remove_at`](ManagedArray::fast_remove_at).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;

pub use array::ManagedArray;
pub use config::ArrayConfig;
pub use tether_core::{ArrayError, Notify, RefHandle};
