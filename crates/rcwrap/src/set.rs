//! Set wrapper: distinct objects with value semantics

use std::hash::{Hash, Hasher};

use indexmap::IndexSet;

use crate::cow::{CowHandle, Wrapper};
use crate::object::{hash_unordered, IntoObject, Object};
use crate::runtime::{Kind, Resource};

impl Resource for IndexSet<Object> {
    const KIND: Kind = Kind::Set;

    fn with_capacity(capacity_hint: usize) -> Self {
        IndexSet::with_capacity(capacity_hint)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// A collection of distinct objects.
#[derive(Clone, Default)]
pub struct Set {
    cell: CowHandle<IndexSet<Object>>,
}

impl Wrapper for Set {
    type Storage = IndexSet<Object>;

    fn cell(&self) -> &CowHandle<IndexSet<Object>> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut CowHandle<IndexSet<Object>> {
        &mut self.cell
    }

    fn from_cell(cell: CowHandle<IndexSet<Object>>) -> Self {
        Self { cell }
    }
}

impl Set {
    /// Create an empty set backed by fresh private storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a null set.
    pub fn null() -> Self {
        Self::from_cell(CowHandle::null())
    }

    /// Deep copy into new private storage.
    pub fn copy(&self) -> Self {
        Self::from_cell(self.cell.copy())
    }

    /// Number of members (0 when null).
    pub fn count(&self) -> usize {
        self.cell.get().map_or(0, IndexSet::len)
    }

    /// Whether the set is null or has no members.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether `value` is a member.
    pub fn contains(&self, value: impl IntoObject) -> bool {
        match (self.cell.get(), value.into_object()) {
            (Some(members), Some(value)) => members.contains(&value),
            _ => false,
        }
    }

    /// Add `value`. Returns whether it was newly added; no value is a no-op.
    pub fn add(&mut self, value: impl IntoObject) -> bool {
        let Some(value) = value.into_object() else {
            return false;
        };
        if self.cell.get().is_some_and(|members| members.contains(&value)) {
            return false;
        }
        self.cell.make_mut().insert(value)
    }

    /// Remove `value`. Returns whether it was present.
    pub fn remove(&mut self, value: impl IntoObject) -> bool {
        let Some(value) = value.into_object() else {
            return false;
        };
        if !self.cell.get().is_some_and(|members| members.contains(&value)) {
            return false;
        }
        self.cell.make_mut().shift_remove(&value)
    }

    /// Iterate over members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Object> {
        self.cell.get().into_iter().flat_map(IndexSet::iter)
    }
}

impl PartialEq for Set {
    fn eq(&self, other: &Self) -> bool {
        self.cell.is_equal(&other.cell)
    }
}

impl Eq for Set {}

/// Independent of insertion order, like equality.
impl Hash for Set {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count().hash(state);
        state.write_u64(hash_unordered(self.iter()));
    }
}

impl FromIterator<Object> for Set {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        let mut set = Set::new();
        for item in iter {
            set.add(item);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_distinct() {
        let mut s = Set::new();
        assert!(s.add("a"));
        assert!(!s.add("a"));
        assert!(!s.add(None::<Object>));
        assert_eq!(s.count(), 1);
        assert!(s.contains("a"));
    }

    #[test]
    fn test_duplicate_add_keeps_sharing() {
        let mut a = Set::new();
        a.add(1);
        let mut b = a.clone();
        b.add(1);
        assert_eq!(a.share_count(), 2);
        b.add(2);
        assert_eq!(a.share_count(), 1);
        assert_eq!(a.count(), 1);
    }

    #[test]
    fn test_remove() {
        let mut s: Set = vec![Object::integer(1), Object::integer(2)].into_iter().collect();
        assert!(s.remove(1));
        assert!(!s.remove(1));
        assert_eq!(s.count(), 1);
    }
}
