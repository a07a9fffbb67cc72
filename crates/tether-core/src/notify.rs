//! Typed broadcast targets.

/// An object that can receive a broadcast event of type `E`.
///
/// Containers that broadcast to their elements require this bound on the
/// element's target, so an element that cannot handle `E` is rejected at
/// compile time rather than skipped.
pub trait Notify<E: ?Sized> {
    /// Handle one event. The return value of the underlying operation, if
    /// any, is not observed by the sender.
    fn notify(&self, event: &E);
}
