//! Text wrapper: Unicode strings with value semantics.
//!
//! Text built from a literal or a borrowed `&str` starts out as an
//! immutable resource. The first edit converts it into a private mutable
//! copy, so read-only strings never pay for mutable storage.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::AddAssign;
use std::path::Path;

use crate::cow::{CowHandle, Wrapper};
use crate::data::Data;
use crate::error::Result;
use crate::runtime::{Kind, Resource};

impl Resource for String {
    const KIND: Kind = Kind::String;

    fn with_capacity(capacity_hint: usize) -> Self {
        String::with_capacity(capacity_hint)
    }

    fn try_with_capacity(capacity_hint: usize) -> Result<Self> {
        let mut s = String::new();
        s.try_reserve(capacity_hint)?;
        Ok(s)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// A Unicode string.
///
/// Positions and lengths count characters, not bytes. A null `Text` reads
/// as the empty string.
#[derive(Clone, Default)]
pub struct Text {
    cell: CowHandle<String>,
}

impl Wrapper for Text {
    type Storage = String;

    fn cell(&self) -> &CowHandle<String> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut CowHandle<String> {
        &mut self.cell
    }

    fn from_cell(cell: CowHandle<String>) -> Self {
        Self { cell }
    }
}

impl Text {
    /// Create an empty string backed by fresh private storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty string with room for `capacity_hint` bytes.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self::from_cell(CowHandle::with_capacity(capacity_hint))
    }

    /// Create a null string.
    pub fn null() -> Self {
        Self::from_cell(CowHandle::null())
    }

    /// Deep copy into new private storage.
    pub fn copy(&self) -> Self {
        Self::from_cell(self.cell.copy())
    }

    /// The string contents (`""` when null).
    pub fn as_str(&self) -> &str {
        self.cell.get().map_or("", String::as_str)
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.as_str().chars().count()
    }

    /// Whether the string is null or has no characters.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Character at position `index`.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.as_str().chars().nth(index)
    }

    /// Whether the string starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    /// Whether the string ends with `suffix`.
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.as_str().ends_with(suffix)
    }

    /// Character position of the first occurrence of `needle`.
    pub fn find(&self, needle: &str) -> Option<usize> {
        let s = self.as_str();
        s.find(needle).map(|byte| s[..byte].chars().count())
    }

    /// Character position of the first `needle` lying wholly inside
    /// `start..end`.
    ///
    /// Returns `None` unless `start < end <= len`.
    pub fn find_in(&self, needle: &str, start: usize, end: usize) -> Option<usize> {
        if end <= start || end > self.len() {
            return None;
        }
        self.substring(start, end).find(needle).map(|pos| pos + start)
    }

    /// Character position of the first `c` inside `start..end`.
    ///
    /// Returns `None` unless `start < end <= len`.
    pub fn char_index(&self, c: char, start: usize, end: usize) -> Option<usize> {
        if end <= start || end > self.len() {
            return None;
        }
        self.as_str()
            .chars()
            .skip(start)
            .take(end - start)
            .position(|x| x == c)
            .map(|pos| pos + start)
    }

    /// Characters in `start..end`.
    ///
    /// An invalid range (`end <= start` or `end > len`) yields empty text.
    pub fn substring(&self, start: usize, end: usize) -> Text {
        if end <= start || end > self.len() {
            return Text::new();
        }
        let piece: String = self.as_str().chars().skip(start).take(end - start).collect();
        Text::from(piece)
    }

    /// Append `s`.
    pub fn push_str(&mut self, s: &str) {
        if !s.is_empty() {
            self.cell.make_mut().push_str(s);
        }
    }

    /// Append one character.
    pub fn push(&mut self, c: char) {
        self.cell.make_mut().push(c);
    }

    /// Write the UTF-8 bytes to `path`. Returns `false` on failure.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> bool {
        Data::from(self.as_str().as_bytes()).write_to_path(path)
    }
}

impl From<&str> for Text {
    /// Immutable text; copied on first edit.
    fn from(s: &str) -> Self {
        Self::from_cell(CowHandle::frozen(s.to_owned()))
    }
}

impl From<String> for Text {
    /// Immutable text; copied on first edit.
    fn from(s: String) -> Self {
        Self::from_cell(CowHandle::frozen(s))
    }
}

impl AddAssign<&str> for Text {
    fn add_assign(&mut self, rhs: &str) {
        self.push_str(rhs);
    }
}

impl AddAssign<&Text> for Text {
    fn add_assign(&mut self, rhs: &Text) {
        // Appending to a null text shares the right-hand side's storage.
        if self.cell.is_null() {
            self.cell.clone_from(&rhs.cell);
            return;
        }
        self.push_str(rhs.as_str());
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.cell.is_equal(&other.cell)
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialOrd for Text {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Text {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}
