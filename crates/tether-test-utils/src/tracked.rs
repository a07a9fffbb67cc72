//! Instrumented handles and the objects behind them.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tether_core::{Notify, RefHandle};

use crate::ledger::{ObjectId, RefLedger};

/// A named broadcast event, standing in for a zero-argument operation
/// such as `"on_enter"` or `"cleanup"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signal(pub &'static str);

/// The shared object behind a [`TrackedHandle`].
pub struct TrackedObject {
    id: ObjectId,
    name: String,
    received: RefCell<Vec<&'static str>>,
}

impl TrackedObject {
    pub(crate) fn new(id: ObjectId, name: String) -> Self {
        Self {
            id,
            name,
            received: RefCell::new(Vec::new()),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of every [`Signal`] received, in arrival order.
    pub fn received(&self) -> Vec<&'static str> {
        self.received.borrow().clone()
    }
}

impl Notify<Signal> for TrackedObject {
    fn notify(&self, event: &Signal) {
        self.received.borrow_mut().push(event.0);
    }
}

impl fmt::Debug for TrackedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

/// A reference-counted handle that reports every clone and drop to its
/// [`RefLedger`].
pub struct TrackedHandle {
    object: Rc<TrackedObject>,
    ledger: RefLedger,
}

impl TrackedHandle {
    pub(crate) fn new(object: Rc<TrackedObject>, ledger: RefLedger) -> Self {
        Self { object, ledger }
    }

    pub fn id(&self) -> ObjectId {
        self.object.id
    }

    pub fn name(&self) -> &str {
        &self.object.name
    }
}

impl Clone for TrackedHandle {
    fn clone(&self) -> Self {
        self.ledger.record_acquire(self.object.id);
        Self {
            object: Rc::clone(&self.object),
            ledger: self.ledger.clone(),
        }
    }
}

impl Drop for TrackedHandle {
    fn drop(&mut self) {
        self.ledger.record_release(self.object.id);
    }
}

impl RefHandle for TrackedHandle {
    type Target = TrackedObject;

    fn object(&self) -> &TrackedObject {
        &self.object
    }

    fn same_object(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.object, &other.object)
    }

    fn ref_count(&self) -> usize {
        Rc::strong_count(&self.object)
    }
}

impl fmt::Debug for TrackedHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.object, f)
    }
}
