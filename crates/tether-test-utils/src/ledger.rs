//! Per-object acquire/release bookkeeping.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::tracked::{TrackedHandle, TrackedObject};

/// Identifies one object spawned from a [`RefLedger`].
///
/// Assigned sequentially in spawn order, starting at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Acquire and release counts for one object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefTally {
    /// Spawns plus clones.
    pub acquires: u64,
    /// Drops.
    pub releases: u64,
}

impl RefTally {
    /// References acquired and not yet released.
    pub fn outstanding(&self) -> u64 {
        // A release without a matching acquire would be a double free.
        assert!(
            self.releases <= self.acquires,
            "released more often than acquired: {self:?}"
        );
        self.acquires - self.releases
    }
}

/// Shared ledger recording every acquire and release of its handles.
///
/// Cloning the ledger shares the same records.
#[derive(Clone, Default)]
pub struct RefLedger {
    tallies: Rc<RefCell<IndexMap<ObjectId, RefTally>>>,
}

impl RefLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new object and return the first handle to it.
    ///
    /// The returned handle counts as one acquire.
    pub fn spawn(&self, name: impl Into<String>) -> TrackedHandle {
        let id = {
            let mut tallies = self.tallies.borrow_mut();
            let id = ObjectId(tallies.len() as u32);
            tallies.insert(
                id,
                RefTally {
                    acquires: 1,
                    releases: 0,
                },
            );
            id
        };
        TrackedHandle::new(Rc::new(TrackedObject::new(id, name.into())), self.clone())
    }

    /// Spawn `n` objects named `"{prefix}{i}"`.
    pub fn spawn_many(&self, prefix: &str, n: usize) -> Vec<TrackedHandle> {
        (0..n).map(|i| self.spawn(format!("{prefix}{i}"))).collect()
    }

    /// Counts for `id`, or `None` if no such object was spawned.
    pub fn tally(&self, id: ObjectId) -> Option<RefTally> {
        self.tallies.borrow().get(&id).copied()
    }

    /// Counts for the object behind `handle`.
    pub fn tally_of(&self, handle: &TrackedHandle) -> RefTally {
        self.tally(handle.id())
            .unwrap_or_else(|| panic!("object {} not spawned from this ledger", handle.id()))
    }

    /// References to `handle`'s object currently held anywhere.
    pub fn outstanding(&self, handle: &TrackedHandle) -> u64 {
        self.tally_of(handle).outstanding()
    }

    /// All tallies in spawn order.
    pub fn snapshot(&self) -> Vec<(ObjectId, RefTally)> {
        self.tallies
            .borrow()
            .iter()
            .map(|(&id, &tally)| (id, tally))
            .collect()
    }

    /// Number of objects spawned so far.
    pub fn object_count(&self) -> usize {
        self.tallies.borrow().len()
    }

    pub(crate) fn record_acquire(&self, id: ObjectId) {
        if let Some(tally) = self.tallies.borrow_mut().get_mut(&id) {
            tally.acquires += 1;
        }
    }

    pub(crate) fn record_release(&self, id: ObjectId) {
        if let Some(tally) = self.tallies.borrow_mut().get_mut(&id) {
            tally.releases += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_counts_as_one_acquire() {
        let ledger = RefLedger::new();
        let h = ledger.spawn("a");
        assert_eq!(
            ledger.tally_of(&h),
            RefTally {
                acquires: 1,
                releases: 0
            }
        );
        assert_eq!(ledger.outstanding(&h), 1);
    }

    #[test]
    fn clone_and_drop_are_recorded() {
        let ledger = RefLedger::new();
        let h = ledger.spawn("a");
        let id = h.id();
        let c = h.clone();
        assert_eq!(ledger.outstanding(&h), 2);
        drop(c);
        drop(h);
        let tally = ledger.tally(id).unwrap();
        assert_eq!(tally.acquires, 2);
        assert_eq!(tally.releases, 2);
        assert_eq!(tally.outstanding(), 0);
    }

    #[test]
    fn ids_follow_spawn_order() {
        let ledger = RefLedger::new();
        let hs = ledger.spawn_many("n", 3);
        let ids: Vec<_> = hs.iter().map(|h| h.id()).collect();
        assert_eq!(ids, vec![ObjectId(0), ObjectId(1), ObjectId(2)]);
        assert_eq!(ledger.object_count(), 3);
        let snap = ledger.snapshot();
        assert_eq!(snap.len(), 3);
        assert_eq!(snap[2].0, ObjectId(2));
    }

    #[test]
    fn unknown_id_has_no_tally() {
        let ledger = RefLedger::new();
        assert!(ledger.tally(ObjectId(7)).is_none());
    }

    #[test]
    #[should_panic(expected = "released more often than acquired")]
    fn outstanding_detects_double_release() {
        let tally = RefTally {
            acquires: 1,
            releases: 2,
        };
        tally.outstanding();
    }
}
