//! The managed array.
//!
//! [`ManagedArray`] owns one reference per live slot. Storing a handle
//! clones it (acquire); removing, overwriting, clearing or dropping the
//! array drops it (release). Lookups compare handles by identity through
//! [`RefHandle::same_object`], never by value.
//!
//! ```text
//! slots:  [ h0 | h1 | h2 | .. | h(len-1) | unused .. ]
//!          \________ live ________/      \_ capacity - len _/
//! ```
//!
//! Capacity is tracked on the array's own doubling schedule. The backing
//! `Vec` is reserved to at least that many slots, so non-growing appends
//! never reallocate.

use std::fmt;
use std::ops::Deref;

use smallvec::SmallVec;
use tether_core::{ArrayError, Notify, RefHandle};
use tracing::{debug, trace};

use crate::config::{doubled_capacity, ArrayConfig};

/// A growable sequence of reference-counted handles that owns one
/// reference per element.
///
/// # Contract checks
///
/// [`append`](Self::append) on a full array and out-of-range indices to
/// [`remove_at`](Self::remove_at) / [`fast_remove_at`](Self::fast_remove_at)
/// are caller errors and panic. Use [`try_append`](Self::try_append),
/// [`append_resizing`](Self::append_resizing) or
/// [`take_at`](Self::take_at) when the condition is not known to hold.
pub struct ManagedArray<H: RefHandle> {
    /// Live handles, `items.len()` is the array length.
    items: Vec<H>,
    /// Logical slot count. `items.capacity() >= capacity >= items.len()`.
    capacity: usize,
    /// Growth limit from the config.
    max_capacity: usize,
}

impl<H: RefHandle> ManagedArray<H> {
    /// Create an empty array with [`ArrayConfig::DEFAULT_INITIAL_CAPACITY`]
    /// slots.
    pub fn new() -> Self {
        Self::with_capacity(ArrayConfig::DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty array with room for `capacity` handles.
    ///
    /// Allocation failure aborts, as for `Vec::with_capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            max_capacity: ArrayConfig::UNBOUNDED,
        }
    }

    /// Create an empty array with room for `capacity` handles, reporting
    /// allocation failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| ArrayError::AllocationFailed {
                requested: capacity,
            })?;
        Ok(Self {
            items,
            capacity,
            max_capacity: ArrayConfig::UNBOUNDED,
        })
    }

    /// Create an empty array from a validated config.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        let mut array = Self::try_with_capacity(config.initial_capacity)?;
        array.max_capacity = config.max_capacity;
        Ok(array)
    }

    /// Release every element and free the buffer.
    ///
    /// Equivalent to dropping the array.
    pub fn destroy(self) {
        drop(self);
    }

    /// Destroy `array` if present. `None` is a no-op.
    pub fn destroy_opt(array: Option<Self>) {
        if let Some(array) = array {
            array.destroy();
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated slot count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots still free before the next growth.
    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    /// Largest capacity growth may reach.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Live elements as a slice.
    pub fn as_slice(&self) -> &[H] {
        &self.items
    }

    /// Approximate buffer footprint in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<H>()
    }

    /// Double the capacity, preserving every live slot.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is already at its limit or the allocator
    /// cannot provide the new buffer.
    pub fn grow_capacity(&mut self) {
        if let Err(err) = self.try_grow_capacity() {
            panic!("ManagedArray::grow_capacity: {err}");
        }
    }

    /// Double the capacity, reporting failure instead of panicking.
    ///
    /// The array is unchanged on error.
    pub fn try_grow_capacity(&mut self) -> Result<(), ArrayError> {
        let next = doubled_capacity(self.capacity, self.max_capacity)?;
        self.items
            .try_reserve_exact(next - self.items.len())
            .map_err(|_| ArrayError::AllocationFailed { requested: next })?;
        trace!(from = self.capacity, to = next, "grew managed array");
        self.capacity = next;
        Ok(())
    }

    /// Acquire a reference to `handle` and store it after the last element.
    ///
    /// Never grows the array.
    ///
    /// # Panics
    ///
    /// Panics if the array is full.
    pub fn append(&mut self, handle: &H) {
        assert!(
            self.items.len() < self.capacity,
            "ManagedArray::append: array is full (capacity {})",
            self.capacity
        );
        self.items.push(handle.clone());
    }

    /// Like [`append`](Self::append), but returns
    /// [`ArrayError::CapacityExceeded`] instead of panicking when full.
    /// No reference is acquired on error.
    pub fn try_append(&mut self, handle: &H) -> Result<(), ArrayError> {
        if self.items.len() >= self.capacity {
            return Err(ArrayError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(handle.clone());
        Ok(())
    }

    /// Append `handle`, doubling the capacity first if the array is full.
    pub fn append_resizing(&mut self, handle: &H) {
        if self.items.len() == self.capacity {
            self.grow_capacity();
        }
        self.append(handle);
    }

    /// Append every element of `other` in order, growing as needed.
    ///
    /// Each appended element acquires a fresh reference; `other` keeps
    /// its own.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity cannot be reached.
    pub fn append_all_resizing(&mut self, other: &[H]) {
        if let Err(err) = self.try_append_all_resizing(other) {
            panic!("ManagedArray::append_all_resizing: {err}");
        }
    }

    /// Fallible form of [`append_all_resizing`](Self::append_all_resizing).
    ///
    /// Nothing is appended on error, though capacity may already have
    /// grown part of the way.
    pub fn try_append_all_resizing(&mut self, other: &[H]) -> Result<(), ArrayError> {
        let needed = self.items.len().checked_add(other.len()).ok_or(
            ArrayError::CapacityOverflow {
                capacity: self.capacity,
                max_capacity: self.max_capacity,
            },
        )?;
        while self.capacity < needed {
            self.try_grow_capacity()?;
        }
        self.items.extend(other.iter().cloned());
        Ok(())
    }

    /// Index of the first slot holding the same object as `handle`.
    pub fn index_of(&self, handle: &H) -> Option<usize> {
        self.items.iter().position(|h| h.same_object(handle))
    }

    /// Every index holding the same object as `handle`, in order.
    pub fn indices_of(&self, handle: &H) -> SmallVec<[usize; 4]> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, h)| h.same_object(handle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether any slot holds the same object as `handle`.
    pub fn contains(&self, handle: &H) -> bool {
        self.index_of(handle).is_some()
    }

    /// Release every element. Capacity is kept for reuse.
    pub fn clear(&mut self) {
        let released = self.items.len();
        self.items.clear();
        debug!(released, "cleared managed array");
    }

    /// Release the element at `index` and shift the tail down one slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove_at(&mut self, index: usize) {
        let len = self.items.len();
        assert!(
            index < len,
            "ManagedArray::remove_at: index {index} out of range for length {len}"
        );
        drop(self.items.remove(index));
    }

    /// Release the element at `index` and move the last element into its
    /// slot. Does not preserve order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn fast_remove_at(&mut self, index: usize) {
        let len = self.items.len();
        assert!(
            index < len,
            "ManagedArray::fast_remove_at: index {index} out of range for length {len}"
        );
        drop(self.items.swap_remove(index));
    }

    /// Remove the element at `index`, shifting the tail, and hand the
    /// array's reference to the caller. Returns `None` if out of range.
    pub fn take_at(&mut self, index: usize) -> Option<H> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove the first occurrence of `handle`, preserving order.
    ///
    /// Returns whether anything was removed. An absent handle leaves the
    /// array and every reference count untouched.
    pub fn remove_object(&mut self, handle: &H) -> bool {
        match self.index_of(handle) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// For each element of `other`, in order, remove its first occurrence.
    ///
    /// A handle listed twice in `other` removes at most two occurrences.
    pub fn remove_array(&mut self, other: &[H]) {
        for handle in other {
            self.remove_object(handle);
        }
    }

    /// Remove every element that is the same object as any element of
    /// `other`, preserving the order of the rest.
    pub fn remove_array_full(&mut self, other: &[H]) {
        self.items.retain(|h| !other.iter().any(|o| o.same_object(h)));
    }

    /// Run `op` on every element's object, in index order.
    pub fn for_each_invoke<F>(&self, mut op: F)
    where
        F: FnMut(&H::Target),
    {
        for handle in &self.items {
            op(handle.object());
        }
    }

    /// Send `event` to every element's object, in index order.
    pub fn broadcast<E>(&self, event: &E)
    where
        E: ?Sized,
        H::Target: Notify<E>,
    {
        for handle in &self.items {
            handle.object().notify(event);
        }
    }

    /// Iterate over the live handles.
    pub fn iter(&self) -> std::slice::Iter<'_, H> {
        self.items.iter()
    }
}

impl<H: RefHandle> Default for ManagedArray<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: RefHandle> Drop for ManagedArray<H> {
    fn drop(&mut self) {
        if !self.items.is_empty() {
            trace!(released = self.items.len(), "dropping managed array");
        }
    }
}

impl<H: RefHandle> Clone for ManagedArray<H> {
    /// Copies the slot layout; every element acquires one new reference.
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            capacity: self.capacity,
            max_capacity: self.max_capacity,
        }
    }
}

impl<H: RefHandle> Deref for ManagedArray<H> {
    type Target = [H];

    fn deref(&self) -> &[H] {
        &self.items
    }
}

impl<H: RefHandle + fmt::Debug> fmt::Debug for ManagedArray<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedArray")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}

impl<'a, H: RefHandle> IntoIterator for &'a ManagedArray<H> {
    type Item = &'a H;
    type IntoIter = std::slice::Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<H: RefHandle> IntoIterator for ManagedArray<H> {
    type Item = H;
    type IntoIter = std::vec::IntoIter<H>;

    /// Hands every reference to the iterator; none are released here.
    fn into_iter(mut self) -> Self::IntoIter {
        std::mem::take(&mut self.items).into_iter()
    }
}

impl<H: RefHandle> FromIterator<H> for ManagedArray<H> {
    /// Takes ownership of the given references; capacity equals length.
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        let items: Vec<H> = iter.into_iter().collect();
        Self {
            capacity: items.len(),
            items,
            max_capacity: ArrayConfig::UNBOUNDED,
        }
    }
}

impl<H: RefHandle> Extend<H> for ManagedArray<H> {
    /// Takes ownership of the given references, doubling when full.
    fn extend<I: IntoIterator<Item = H>>(&mut self, iter: I) {
        for handle in iter {
            if self.items.len() == self.capacity {
                self.grow_capacity();
            }
            self.items.push(handle);
        }
    }
}
