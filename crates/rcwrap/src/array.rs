//! Array wrapper: an ordered sequence of objects with value semantics

use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign};
use std::path::Path;

use crate::cow::{CowHandle, Wrapper};
use crate::entry::ArrayEntry;
use crate::error::{RcWrapError, Result};
use crate::object::{IntoObject, Object};
use crate::persist::{self, Format};
use crate::runtime::{Kind, Resource};

impl Resource for Vec<Object> {
    const KIND: Kind = Kind::Array;

    fn with_capacity(capacity_hint: usize) -> Self {
        Vec::with_capacity(capacity_hint)
    }

    fn try_with_capacity(capacity_hint: usize) -> Result<Self> {
        let mut items = Vec::new();
        items.try_reserve(capacity_hint)?;
        Ok(items)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// An ordered sequence of objects.
///
/// Copies are shallow and cheap; the first write to a copy detaches it.
///
/// # Example
///
/// ```
/// use rcwrap::Array;
///
/// let mut a = Array::new();
/// a.append(1);
/// a.append(2);
///
/// let mut b = a.clone();
/// b.append(3);
///
/// assert_eq!(a.count(), 2);
/// assert_eq!(b.count(), 3);
/// ```
#[derive(Clone, Default)]
pub struct Array {
    cell: CowHandle<Vec<Object>>,
}

impl Wrapper for Array {
    type Storage = Vec<Object>;

    fn cell(&self) -> &CowHandle<Vec<Object>> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut CowHandle<Vec<Object>> {
        &mut self.cell
    }

    fn from_cell(cell: CowHandle<Vec<Object>>) -> Self {
        Self { cell }
    }
}

impl Array {
    // ═══════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════

    /// Create an empty array backed by fresh private storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty array sized for `capacity_hint` elements.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self::from_cell(CowHandle::with_capacity(capacity_hint))
    }

    /// Fallible variant of [`Array::with_capacity`].
    pub fn try_with_capacity(capacity_hint: usize) -> Result<Self> {
        Ok(Self::from_cell(CowHandle::try_with_capacity(capacity_hint)?))
    }

    /// Create a null array.
    pub fn null() -> Self {
        Self::from_cell(CowHandle::null())
    }

    /// Create an array around an immutable resource holding `items`.
    ///
    /// The first mutation makes a private mutable copy.
    pub fn frozen(items: Vec<Object>) -> Self {
        Self::from_cell(CowHandle::frozen(items))
    }

    /// Deep copy into new private storage.
    pub fn copy(&self) -> Self {
        Self::from_cell(self.cell.copy())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Read Access
    // ═══════════════════════════════════════════════════════════════════

    /// Number of elements (0 when null).
    pub fn count(&self) -> usize {
        self.cell.get().map_or(0, Vec::len)
    }

    /// Whether the array is null or has no elements.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Elements as a slice.
    pub fn as_slice(&self) -> &[Object] {
        self.cell.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// Element at `index`, or `None` when out of range. Never copies.
    pub fn at(&self, index: usize) -> Option<&Object> {
        self.as_slice().get(index)
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.as_slice().iter()
    }

    /// Whether some element equals `value`.
    pub fn contains(&self, value: &Object) -> bool {
        self.as_slice().contains(value)
    }

    /// Index of the first element equal to `value`.
    pub fn index_of(&self, value: &Object) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Mutation
    // ═══════════════════════════════════════════════════════════════════

    /// Write proxy for the element at `index`.
    ///
    /// The array is made private and mutable when the proxy is created, not
    /// when it is written through.
    pub fn at_mut(&mut self, index: usize) -> Result<ArrayEntry<'_>> {
        let count = self.count();
        if index >= count {
            return Err(RcWrapError::out_of_range(index, count));
        }
        Ok(ArrayEntry::new(self.cell.make_mut(), index))
    }

    /// Append `value`. Appending no value is a no-op.
    pub fn append(&mut self, value: impl IntoObject) {
        if let Some(object) = value.into_object() {
            self.cell.make_mut().push(object);
        }
    }

    /// Append every element of `other`. A null or empty `other` is a no-op.
    ///
    /// A null array takes a shared reference to `other` instead of copying.
    pub fn append_array(&mut self, other: &Array) {
        let Some(source) = other.cell.handle() else {
            return;
        };
        if source.get().is_empty() {
            return;
        }
        if self.cell.is_null() {
            self.cell = CowHandle::adopt_shared(source);
            return;
        }
        let items = other.as_slice().to_vec();
        self.cell.make_mut().extend(items);
    }

    /// Insert `value` before `index` (`index == count` appends).
    pub fn insert_at(&mut self, index: usize, value: impl IntoObject) -> Result<()> {
        let Some(object) = value.into_object() else {
            return Ok(());
        };
        let count = self.count();
        if index > count {
            return Err(RcWrapError::out_of_range(index, count));
        }
        self.cell.make_mut().insert(index, object);
        Ok(())
    }

    /// Replace the element at `index`, returning the previous one.
    ///
    /// Replacing with no value is a no-op and returns `Ok(None)`.
    pub fn set_at(&mut self, index: usize, value: impl IntoObject) -> Result<Option<Object>> {
        let Some(object) = value.into_object() else {
            return Ok(None);
        };
        let mut entry = self.at_mut(index)?;
        Ok(Some(entry.replace(object)))
    }

    /// Remove and return the element at `index`.
    ///
    /// Fails with `OutOfRange` (leaving the array untouched) when
    /// `index >= count`.
    pub fn remove_at(&mut self, index: usize) -> Result<Object> {
        let count = self.count();
        if index >= count {
            return Err(RcWrapError::out_of_range(index, count));
        }
        Ok(self.cell.make_mut().remove(index))
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.cell.make_mut().clear();
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Persistence
    // ═══════════════════════════════════════════════════════════════════

    /// Write the array as a document at `path`. Returns `false` on failure.
    pub fn write_to_path(&self, path: impl AsRef<Path>, format: Format) -> bool {
        persist::store(path.as_ref(), Object::Array(self.clone()), format)
    }

    /// Read an array document from `path`, with the format it was stored in.
    ///
    /// An unreadable file or a document whose root is not an array yields a
    /// fresh empty array.
    pub fn read_from_path(path: impl AsRef<Path>) -> (Array, Format) {
        persist::load_or_empty(path.as_ref())
    }

    /// [`Array::read_from_path`] without the format.
    pub fn from_path(path: impl AsRef<Path>) -> Array {
        Self::read_from_path(path).0
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.cell.is_equal(&other.cell)
    }
}

impl Eq for Array {}

impl Hash for Array {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl From<Vec<Object>> for Array {
    fn from(items: Vec<Object>) -> Self {
        Self::from_cell(CowHandle::from_value(items))
    }
}

impl FromIterator<Object> for Array {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self::from(iter.into_iter().filter(|o| !o.is_null()).collect::<Vec<_>>())
    }
}

impl Extend<Object> for Array {
    fn extend<I: IntoIterator<Item = Object>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AddAssign<&Array> for Array {
    fn add_assign(&mut self, rhs: &Array) {
        self.append_array(rhs);
    }
}

impl Add<&Array> for &Array {
    type Output = Array;

    fn add(self, rhs: &Array) -> Array {
        let mut sum = self.clone();
        sum += rhs;
        sum
    }
}
