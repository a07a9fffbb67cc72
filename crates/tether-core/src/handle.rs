//! The reference-counted handle capability.
//!
//! A [`RefHandle`] is any owned reference to a shared object where
//! cloning acquires a new reference and dropping releases one. Containers
//! never touch the count directly: storing a handle is a clone, removing
//! one is a drop, so the count can only drift if the handle type itself
//! is broken.

use std::rc::Rc;
use std::sync::Arc;

/// An owned, reference-counted pointer to a shared object.
///
/// - **Acquire** is [`Clone::clone`].
/// - **Release** is [`Drop`].
/// - **Identity** is [`same_object`](RefHandle::same_object): two handles
///   are the same when they point at the same instance, regardless of
///   whether the referents compare equal.
pub trait RefHandle: Clone {
    /// The shared object behind the handle.
    type Target: ?Sized;

    /// Borrow the shared object.
    fn object(&self) -> &Self::Target;

    /// Whether `self` and `other` refer to the same instance.
    fn same_object(&self, other: &Self) -> bool;

    /// Number of live strong references to the instance, including `self`.
    ///
    /// Diagnostic only; containers never branch on it.
    fn ref_count(&self) -> usize;
}

impl<T: ?Sized> RefHandle for Rc<T> {
    type Target = T;

    fn object(&self) -> &T {
        self
    }

    fn same_object(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }

    fn ref_count(&self) -> usize {
        Rc::strong_count(self)
    }
}

impl<T: ?Sized> RefHandle for Arc<T> {
    type Target = T;

    fn object(&self) -> &T {
        self
    }

    fn same_object(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }

    fn ref_count(&self) -> usize {
        Arc::strong_count(self)
    }
}
