//! Common surface of every handle-backed wrapper

use super::{CowHandle, CowState};
use crate::runtime::{Handle, Kind, Resource};

/// A value type built on a single [`CowHandle`].
///
/// This is the compile-time "participates in the reference-counted
/// protocol" constraint: generic code such as [`crate::Pair`] accepts any
/// `Wrapper`, and the storage type must implement [`Resource`].
pub trait Wrapper: Clone {
    /// Storage behind the handle.
    type Storage: Resource;

    /// The underlying cell.
    fn cell(&self) -> &CowHandle<Self::Storage>;

    /// The underlying cell, mutably.
    fn cell_mut(&mut self) -> &mut CowHandle<Self::Storage>;

    /// Build a wrapper around an existing cell.
    fn from_cell(cell: CowHandle<Self::Storage>) -> Self;

    /// Take ownership of `handle` without retaining it.
    fn from_handle(handle: Handle<Self::Storage>) -> Self {
        Self::from_cell(CowHandle::acquire(handle))
    }

    /// Retain `handle` and wrap the new reference.
    fn adopt(handle: &Handle<Self::Storage>) -> Self {
        Self::from_cell(CowHandle::adopt_shared(handle))
    }

    /// Runtime type tag of the storage.
    fn kind(&self) -> Kind {
        <Self::Storage as Resource>::KIND
    }

    /// Whether no resource is held.
    fn is_null(&self) -> bool {
        self.cell().is_null()
    }

    /// Number of owners of the held resource (0 when null).
    fn share_count(&self) -> usize {
        self.cell().share_count()
    }

    /// Copy-on-write state of the wrapper.
    fn state(&self) -> CowState {
        self.cell().state()
    }

    /// The held handle, if any.
    fn handle(&self) -> Option<&Handle<Self::Storage>> {
        self.cell().handle()
    }

    /// Drop the held reference, leaving the wrapper null. Idempotent.
    fn release(&mut self) {
        self.cell_mut().release();
    }

    /// Make the held resource private and mutable ahead of a write.
    fn make_unique(&mut self) {
        let cell = self.cell_mut();
        cell.ensure_mutable();
        cell.ensure_unique();
    }
}
