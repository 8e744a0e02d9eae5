//! Boolean wrapper backed by two shared per-thread resources

use std::hash::{Hash, Hasher};

use crate::cow::{CowHandle, Wrapper};
use crate::runtime::{Handle, Kind, Resource};

impl Resource for bool {
    const KIND: Kind = Kind::Boolean;

    fn with_capacity(_capacity_hint: usize) -> Self {
        false
    }

    fn is_empty_value(&self) -> bool {
        false
    }
}

thread_local! {
    static TRUE: Handle<bool> = Handle::create_immutable(true);
    static FALSE: Handle<bool> = Handle::create_immutable(false);
}

/// A truth value.
///
/// There is exactly one `true` and one `false` resource per thread; every
/// `Boolean` holds a retained reference to one of them.
#[derive(Clone)]
pub struct Boolean {
    cell: CowHandle<bool>,
}

impl Wrapper for Boolean {
    type Storage = bool;

    fn cell(&self) -> &CowHandle<bool> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut CowHandle<bool> {
        &mut self.cell
    }

    fn from_cell(cell: CowHandle<bool>) -> Self {
        Self { cell }
    }
}

impl Boolean {
    /// The shared resource for `value`.
    pub fn new(value: bool) -> Self {
        let singleton = if value { &TRUE } else { &FALSE };
        Self::from_cell(singleton.with(CowHandle::adopt_shared))
    }

    /// Create a null boolean.
    pub fn null() -> Self {
        Self::from_cell(CowHandle::null())
    }

    /// The truth value (`false` when null).
    pub fn value(&self) -> bool {
        self.cell.get().copied().unwrap_or(false)
    }
}

impl Default for Boolean {
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl From<&Boolean> for bool {
    fn from(value: &Boolean) -> Self {
        value.value()
    }
}

impl PartialEq for Boolean {
    fn eq(&self, other: &Self) -> bool {
        self.cell.is_equal(&other.cell)
    }
}

impl Eq for Boolean {}

impl PartialEq<bool> for Boolean {
    fn eq(&self, other: &bool) -> bool {
        !self.is_null() && self.value() == *other
    }
}

impl Hash for Boolean {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.cell.get() {
            None => state.write_u8(2),
            Some(value) => value.hash(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_share_a_singleton() {
        let a = Boolean::new(true);
        let b = Boolean::from(true);
        assert!(a.handle().zip(b.handle()).is_some_and(|(x, y)| x.ptr_eq(y)));
        assert_eq!(a, b);
        assert_ne!(a, Boolean::new(false));
    }

    #[test]
    fn test_comparison_with_bool() {
        assert_eq!(Boolean::new(true), true);
        assert_eq!(Boolean::default(), false);
        assert_ne!(Boolean::null(), false);
    }

    #[test]
    fn test_release_returns_reference() {
        let mut a = Boolean::new(true);
        let before = a.share_count();
        let b = a.clone();
        assert_eq!(b.share_count(), before + 1);
        a.release();
        assert_eq!(b.share_count(), before);
    }
}
