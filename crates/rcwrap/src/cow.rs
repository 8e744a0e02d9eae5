//! Ownership and copy-on-write control for wrapped handles.
//!
//! [`CowHandle`] is the one generic building block every wrapper in this
//! crate is made of. It owns at most one [`Handle`] and keeps it in one of
//! three states:
//!
//! - `Empty`: no resource held (a null wrapper)
//! - `Immutable`: an immutable resource, possibly shared with other owners
//! - `Mutable`: a mutable resource, possibly shared after a shallow copy
//!
//! Cloning a `CowHandle` is shallow: it retains the same resource. Before any
//! write, [`CowHandle::make_mut`] runs [`CowHandle::ensure_mutable`] and then
//! [`CowHandle::ensure_unique`], so a write never lands on storage another
//! owner can observe.

mod wrapper;

pub use wrapper::Wrapper;

use std::fmt;
use std::mem;

use tracing::trace;

use crate::error::Result;
use crate::runtime::{Handle, Resource};

/// The held handle, tagged with how it may be used.
pub enum Slot<R: Resource> {
    /// No resource held
    Empty,
    /// An immutable resource; must be copied before mutation
    Immutable(Handle<R>),
    /// A mutable resource; must be unshared before mutation
    Mutable(Handle<R>),
}

/// Observable state of a [`CowHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CowState {
    /// Null: nothing held
    Empty,
    /// Holding an immutable resource
    ImmutableShared,
    /// Holding a mutable resource
    MutableOwned,
}

/// An owning, copy-on-write cell around a reference-counted handle.
///
/// # Example
///
/// ```
/// use rcwrap::cow::CowHandle;
///
/// let mut a: CowHandle<Vec<u8>> = CowHandle::from_value(vec![1, 2]);
/// let b = a.clone();
/// assert_eq!(a.share_count(), 2);
///
/// a.make_mut().push(3);
/// assert_eq!(a.get(), Some(&vec![1, 2, 3]));
/// assert_eq!(b.get(), Some(&vec![1, 2]));
/// assert_eq!(b.share_count(), 1);
/// ```
pub struct CowHandle<R: Resource> {
    slot: Slot<R>,
    /// Creation parameter reused when storage is created lazily
    capacity_hint: usize,
}

impl<R: Resource> CowHandle<R> {
    // ═══════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════

    /// Create a cell holding a fresh, empty, private mutable resource.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a cell holding fresh empty storage sized for `capacity_hint`.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self {
            slot: Slot::Mutable(Handle::create_empty(capacity_hint)),
            capacity_hint,
        }
    }

    /// Fallible variant of [`CowHandle::with_capacity`].
    pub fn try_with_capacity(capacity_hint: usize) -> Result<Self> {
        Ok(Self {
            slot: Slot::Mutable(Handle::try_create_empty(capacity_hint)?),
            capacity_hint,
        })
    }

    /// Create a null cell.
    pub fn null() -> Self {
        Self {
            slot: Slot::Empty,
            capacity_hint: 0,
        }
    }

    /// Take ownership of `handle` without retaining it.
    ///
    /// The caller's reference is transferred to the cell.
    pub fn acquire(handle: Handle<R>) -> Self {
        let slot = if handle.is_mutable() {
            Slot::Mutable(handle)
        } else {
            Slot::Immutable(handle)
        };
        Self {
            slot,
            capacity_hint: 0,
        }
    }

    /// Retain `handle` and hold the new reference.
    pub fn adopt_shared(handle: &Handle<R>) -> Self {
        Self::acquire(handle.retain())
    }

    /// Wrap `value` in a new private mutable resource.
    pub fn from_value(value: R) -> Self {
        Self::acquire(Handle::create_mutable(value))
    }

    /// Wrap `value` in a new immutable resource.
    pub fn frozen(value: R) -> Self {
        Self::acquire(Handle::create_immutable(value))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Ownership
    // ═══════════════════════════════════════════════════════════════════

    /// Give up the held reference, if any, leaving the cell null.
    ///
    /// Safe to call any number of times.
    pub fn release(&mut self) {
        if let Slot::Immutable(handle) | Slot::Mutable(handle) =
            mem::replace(&mut self.slot, Slot::Empty)
        {
            handle.release();
        }
    }

    /// Exchange contents with `other` without touching any share count.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.slot, &mut other.slot);
        mem::swap(&mut self.capacity_hint, &mut other.capacity_hint);
    }

    /// Replace the held resource with `handle`, taking ownership of it.
    pub fn assign(&mut self, handle: Handle<R>) {
        let mut incoming = Self::acquire(handle);
        incoming.capacity_hint = self.capacity_hint;
        self.swap(&mut incoming);
    }

    /// Give the held handle back to the caller, leaving nothing to release.
    pub fn into_handle(mut self) -> Option<Handle<R>> {
        match mem::replace(&mut self.slot, Slot::Empty) {
            Slot::Empty => None,
            Slot::Immutable(handle) | Slot::Mutable(handle) => Some(handle),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════

    /// Current state of the cell.
    pub fn state(&self) -> CowState {
        match self.slot {
            Slot::Empty => CowState::Empty,
            Slot::Immutable(_) => CowState::ImmutableShared,
            Slot::Mutable(_) => CowState::MutableOwned,
        }
    }

    /// Whether no resource is held.
    pub fn is_null(&self) -> bool {
        matches!(self.slot, Slot::Empty)
    }

    /// Share count of the held resource, or 0 when null.
    pub fn share_count(&self) -> usize {
        self.handle().map_or(0, Handle::share_count)
    }

    /// Capacity hint used for lazily created storage.
    pub fn capacity_hint(&self) -> usize {
        self.capacity_hint
    }

    /// The held handle, if any.
    pub fn handle(&self) -> Option<&Handle<R>> {
        match &self.slot {
            Slot::Empty => None,
            Slot::Immutable(handle) | Slot::Mutable(handle) => Some(handle),
        }
    }

    /// Borrow the held value without triggering a copy.
    pub fn get(&self) -> Option<&R> {
        self.handle().map(Handle::get)
    }

    /// Structural equality with an identity short-circuit.
    ///
    /// A null cell equals a null cell or a cell holding an empty value.
    pub fn is_equal(&self, other: &Self) -> bool {
        match (self.handle(), other.handle()) {
            (Some(a), Some(b)) => a.is_equal(b),
            (None, None) => true,
            (Some(held), None) | (None, Some(held)) => held.get().is_empty_value(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Copy-on-Write
    // ═══════════════════════════════════════════════════════════════════

    /// Make sure the cell holds a mutable resource.
    ///
    /// A null cell gets fresh storage created with the cell's capacity hint.
    /// An immutable resource is replaced by a private mutable copy of it.
    pub fn ensure_mutable(&mut self) {
        match &self.slot {
            Slot::Mutable(_) => {}
            Slot::Empty => {
                trace!(
                    kind = %R::KIND,
                    capacity_hint = self.capacity_hint,
                    "creating storage for null wrapper"
                );
                self.slot = Slot::Mutable(Handle::create_empty(self.capacity_hint));
            }
            Slot::Immutable(handle) => {
                trace!(
                    kind = %R::KIND,
                    share_count = handle.share_count(),
                    "copying immutable resource into private mutable storage"
                );
                let copy = handle.create_mutable_copy();
                self.slot = Slot::Mutable(copy);
            }
        }
    }

    /// Make sure the held mutable resource is not shared with anyone else.
    ///
    /// A share count of exactly 1 is left alone.
    pub fn ensure_unique(&mut self) {
        if let Slot::Mutable(handle) = &self.slot {
            let share_count = handle.share_count();
            if share_count > 1 {
                trace!(
                    kind = %R::KIND,
                    share_count,
                    "detaching shared mutable resource"
                );
                let copy = handle.create_mutable_copy();
                self.slot = Slot::Mutable(copy);
            }
        }
    }

    /// Mutable access to a private, mutable resource.
    ///
    /// Runs [`CowHandle::ensure_mutable`] then [`CowHandle::ensure_unique`].
    pub fn make_mut(&mut self) -> &mut R {
        self.ensure_mutable();
        self.ensure_unique();
        match &mut self.slot {
            Slot::Mutable(handle) => handle.get_mut(),
            Slot::Empty | Slot::Immutable(_) => {
                unreachable!("ensure_mutable always leaves a mutable resource")
            }
        }
    }

    /// Deep copy into a new private resource.
    ///
    /// Copying a null cell yields fresh empty storage.
    pub fn copy(&self) -> Self {
        let mut copy = match self.handle() {
            Some(handle) => Self::acquire(handle.create_mutable_copy()),
            None => Self::with_capacity(self.capacity_hint),
        };
        copy.capacity_hint = self.capacity_hint;
        copy
    }
}

impl<R: Resource> Default for CowHandle<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> Clone for CowHandle<R> {
    fn clone(&self) -> Self {
        let mut cell = match self.handle() {
            Some(handle) => Self::adopt_shared(handle),
            None => Self::null(),
        };
        cell.capacity_hint = self.capacity_hint;
        cell
    }

    fn clone_from(&mut self, source: &Self) {
        let mut temp = source.clone();
        self.swap(&mut temp);
    }
}

impl<R: Resource> Drop for CowHandle<R> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<R: Resource> fmt::Debug for CowHandle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CowHandle")
            .field("kind", &R::KIND)
            .field("state", &self.state())
            .field("share_count", &self.share_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Bytes = CowHandle<Vec<u8>>;

    #[test]
    fn test_new_is_private_and_mutable() {
        let cell = Bytes::new();
        assert_eq!(cell.state(), CowState::MutableOwned);
        assert_eq!(cell.share_count(), 1);
        assert_eq!(cell.get(), Some(&Vec::new()));
    }

    #[test]
    fn test_clone_shares_until_mutation() {
        let mut a = Bytes::from_value(vec![1]);
        let b = a.clone();
        assert_eq!(a.share_count(), 2);

        a.make_mut().push(2);
        assert_eq!(a.share_count(), 1);
        assert_eq!(b.share_count(), 1);
        assert_eq!(b.get(), Some(&vec![1]));
    }

    #[test]
    fn test_ensure_unique_is_noop_when_unshared() {
        let mut a = Bytes::from_value(vec![7]);
        let before = a.handle().map(|h| h.get().as_ptr());
        a.ensure_unique();
        let after = a.handle().map(|h| h.get().as_ptr());
        assert_eq!(before, after);
    }

    #[test]
    fn test_ensure_mutable_from_immutable() {
        let mut a = Bytes::frozen(vec![1, 2]);
        assert_eq!(a.state(), CowState::ImmutableShared);

        a.ensure_mutable();
        assert_eq!(a.state(), CowState::MutableOwned);
        assert_eq!(a.get(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_ensure_mutable_from_empty_keeps_capacity_hint() {
        let mut a = Bytes::with_capacity(32);
        a.release();
        assert!(a.is_null());

        a.ensure_mutable();
        assert_eq!(a.state(), CowState::MutableOwned);
        let capacity = a.get().map(Vec::capacity).unwrap_or_default();
        assert!(capacity >= 32);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut a = Bytes::from_value(vec![1]);
        let b = a.clone();
        a.release();
        a.release();
        assert!(a.is_null());
        assert_eq!(a.share_count(), 0);
        assert_eq!(b.share_count(), 1);
    }

    #[test]
    fn test_swap_moves_no_references() {
        let mut a = Bytes::from_value(vec![1]);
        let mut b = Bytes::null();
        a.swap(&mut b);
        assert!(a.is_null());
        assert_eq!(b.share_count(), 1);
    }

    #[test]
    fn test_clone_from_self_alias() {
        let mut a = Bytes::from_value(vec![1]);
        let b = a.clone();
        a.clone_from(&b);
        assert_eq!(a.share_count(), 2);
        assert!(a.is_equal(&b));
    }

    #[test]
    fn test_null_equals_empty() {
        assert!(Bytes::null().is_equal(&Bytes::new()));
        assert!(!Bytes::null().is_equal(&Bytes::from_value(vec![1])));
    }

    #[test]
    fn test_copy_is_deep() {
        let a = Bytes::from_value(vec![1]);
        let b = a.copy();
        assert_eq!(a.share_count(), 1);
        assert_eq!(b.share_count(), 1);
        assert!(a.is_equal(&b));
    }
}
