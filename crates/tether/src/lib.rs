//! Tether: reference-owning sequence containers for shared handles.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tether sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tether::prelude::*;
//!
//! #[derive(Default)]
//! struct Sprite {
//!     entered: Cell<bool>,
//! }
//!
//! struct Enter;
//!
//! impl Notify<Enter> for Sprite {
//!     fn notify(&self, _event: &Enter) {
//!         self.entered.set(true);
//!     }
//! }
//!
//! let hero = Rc::new(Sprite::default());
//! let prop = Rc::new(Sprite::default());
//!
//! let mut scene = ManagedArray::with_capacity(2);
//! scene.append(&hero);
//! scene.append(&prop);
//! assert_eq!(Rc::strong_count(&hero), 2);
//!
//! scene.broadcast(&Enter);
//! assert!(hero.entered.get() && prop.entered.get());
//!
//! scene.remove_object(&hero);
//! assert_eq!(Rc::strong_count(&hero), 1);
//! assert_eq!(scene.index_of(&prop), Some(0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `tether-array` | `ManagedArray`, `ArrayConfig` |
//! | [`types`] | `tether-core` | `RefHandle`, `Notify`, `ArrayError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The managed array and its configuration (`tether-array`).
pub use tether_array as array;

/// Handle capability traits and errors (`tether-core`).
///
/// Implement [`types::RefHandle`] to store a custom handle type, and
/// [`types::Notify`] to receive broadcasts.
pub use tether_core as types;

/// Common imports for typical Tether usage.
///
/// ```rust
/// use tether::prelude::*;
/// ```
pub mod prelude {
    pub use tether_array::{ArrayConfig, ManagedArray};
    pub use tether_core::{ArrayError, Notify, RefHandle};
}
