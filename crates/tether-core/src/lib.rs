//! Core traits and error types for the Tether workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! what a container needs from its elements (acquire, release, identity)
//! and the error taxonomy shared by every container in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handle;
pub mod notify;

pub use error::ArrayError;
pub use handle::RefHandle;
pub use notify::Notify;
