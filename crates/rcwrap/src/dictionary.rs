//! Dictionary wrapper: object keys mapped to object values

use std::hash::{Hash, Hasher};
use std::path::Path;

use indexmap::IndexMap;

use crate::cow::{CowHandle, Wrapper};
use crate::entry::DictionaryEntry;
use crate::object::{hash_unordered, IntoObject, Object};
use crate::persist::{self, Format};
use crate::runtime::{Kind, Resource};

impl Resource for IndexMap<Object, Object> {
    const KIND: Kind = Kind::Dictionary;

    fn with_capacity(capacity_hint: usize) -> Self {
        IndexMap::with_capacity(capacity_hint)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// A mapping from keys to values.
///
/// Iteration follows insertion order; equality ignores it. A null key or a
/// null value is never stored: such writes are no-ops and such lookups
/// find nothing.
///
/// # Example
///
/// ```
/// use rcwrap::{Dictionary, Object};
///
/// let mut config = Dictionary::new();
/// config.set("name", "demo");
/// config.set("retries", 3);
///
/// let mut copy = config.clone();
/// copy.set("retries", 5);
///
/// assert_eq!(config.get("retries").and_then(Object::as_i64), Some(3));
/// assert_eq!(copy.get("retries").and_then(Object::as_i64), Some(5));
/// ```
#[derive(Clone, Default)]
pub struct Dictionary {
    cell: CowHandle<IndexMap<Object, Object>>,
}

impl Wrapper for Dictionary {
    type Storage = IndexMap<Object, Object>;

    fn cell(&self) -> &CowHandle<IndexMap<Object, Object>> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut CowHandle<IndexMap<Object, Object>> {
        &mut self.cell
    }

    fn from_cell(cell: CowHandle<IndexMap<Object, Object>>) -> Self {
        Self { cell }
    }
}

impl Dictionary {
    /// Create an empty dictionary backed by fresh private storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty dictionary sized for `capacity_hint` entries.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self::from_cell(CowHandle::with_capacity(capacity_hint))
    }

    /// Create a null dictionary.
    pub fn null() -> Self {
        Self::from_cell(CowHandle::null())
    }

    /// Create a dictionary around an immutable resource holding `entries`.
    pub fn frozen(entries: IndexMap<Object, Object>) -> Self {
        Self::from_cell(CowHandle::frozen(entries))
    }

    /// Deep copy into new private storage.
    pub fn copy(&self) -> Self {
        Self::from_cell(self.cell.copy())
    }

    fn entries(&self) -> Option<&IndexMap<Object, Object>> {
        self.cell.get()
    }

    /// Number of entries (0 when null).
    pub fn count(&self) -> usize {
        self.entries().map_or(0, IndexMap::len)
    }

    /// Whether the dictionary is null or has no entries.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Value stored under `key`. Never copies.
    pub fn get(&self, key: impl IntoObject) -> Option<&Object> {
        let key = key.into_object()?;
        self.entries()?.get(&key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: impl IntoObject) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Object, &Object)> {
        self.entries().into_iter().flat_map(IndexMap::iter)
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Object> {
        self.iter().map(|(key, _)| key)
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Object> {
        self.iter().map(|(_, value)| value)
    }

    /// Proxy for the value under `key`, or `None` for a null key.
    ///
    /// The dictionary is made private and mutable when the proxy is created.
    pub fn entry(&mut self, key: impl IntoObject) -> Option<DictionaryEntry<'_>> {
        let key = key.into_object()?;
        Some(DictionaryEntry::new(self.cell.make_mut(), key))
    }

    /// Insert or replace the value under `key`, returning the previous one.
    pub fn set(&mut self, key: impl IntoObject, value: impl IntoObject) -> Option<Object> {
        let (Some(key), Some(value)) = (key.into_object(), value.into_object()) else {
            return None;
        };
        self.cell.make_mut().insert(key, value)
    }

    /// Insert the value only if `key` is absent. Returns whether it was added.
    pub fn add(&mut self, key: impl IntoObject, value: impl IntoObject) -> bool {
        let (Some(key), Some(value)) = (key.into_object(), value.into_object()) else {
            return false;
        };
        if self.entries().is_some_and(|map| map.contains_key(&key)) {
            return false;
        }
        self.cell.make_mut().insert(key, value);
        true
    }

    /// Remove `key`, returning its value. Absent keys leave storage shared.
    pub fn remove(&mut self, key: impl IntoObject) -> Option<Object> {
        let key = key.into_object()?;
        if !self.entries().is_some_and(|map| map.contains_key(&key)) {
            return None;
        }
        self.cell.make_mut().shift_remove(&key)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.cell.make_mut().clear();
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Persistence
    // ═══════════════════════════════════════════════════════════════════

    /// Write the dictionary as a document at `path`. Returns `false` on failure.
    ///
    /// Only string keys can be stored.
    pub fn write_to_path(&self, path: impl AsRef<Path>, format: Format) -> bool {
        persist::store(path.as_ref(), Object::Dictionary(self.clone()), format)
    }

    /// Read a dictionary document from `path`, with the format it was stored in.
    ///
    /// An unreadable file or a document whose root is not a dictionary yields
    /// a fresh empty dictionary.
    pub fn read_from_path(path: impl AsRef<Path>) -> (Dictionary, Format) {
        persist::load_or_empty(path.as_ref())
    }

    /// [`Dictionary::read_from_path`] without the format.
    pub fn from_path(path: impl AsRef<Path>) -> Dictionary {
        Self::read_from_path(path).0
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.cell.is_equal(&other.cell)
    }
}

impl Eq for Dictionary {}

/// Independent of insertion order, like equality.
impl Hash for Dictionary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count().hash(state);
        state.write_u64(hash_unordered(self.iter()));
    }
}

impl From<IndexMap<Object, Object>> for Dictionary {
    fn from(entries: IndexMap<Object, Object>) -> Self {
        Self::from_cell(CowHandle::from_value(entries))
    }
}

impl FromIterator<(Object, Object)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (Object, Object)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.set(key, value);
        }
        dict
    }
}
