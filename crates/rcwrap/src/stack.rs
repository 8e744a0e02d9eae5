//! Last-in, first-out stack of objects

use crate::cow::{CowHandle, Wrapper};
use crate::error::{RcWrapError, Result};
use crate::object::{IntoObject, Object};
use crate::text::Text;

/// A LIFO stack backed by array storage.
///
/// Like [`crate::Array`], copies share storage until one of them is pushed
/// to or popped from.
#[derive(Clone, Default)]
pub struct Stack {
    cell: CowHandle<Vec<Object>>,
}

impl Wrapper for Stack {
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

impl Stack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack sized for `capacity_hint` elements.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self::from_cell(CowHandle::with_capacity(capacity_hint))
    }

    fn items(&self) -> &[Object] {
        self.cell.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.items().len()
    }

    /// Whether the stack has no elements.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Push `value` on top. No value is a no-op.
    pub fn push(&mut self, value: impl IntoObject) {
        if let Some(value) = value.into_object() {
            self.cell.make_mut().push(value);
        }
    }

    /// Remove and return the top element.
    ///
    /// Popping an empty stack fails with `OutOfRange` and leaves shared
    /// storage shared.
    pub fn pop(&mut self) -> Result<Object> {
        if self.is_empty() {
            return Err(RcWrapError::out_of_range(0, 0));
        }
        let items = self.cell.make_mut();
        let top = items.len() - 1;
        Ok(items.remove(top))
    }

    /// The top element.
    pub fn peek(&self) -> Result<&Object> {
        self.items()
            .last()
            .ok_or_else(|| RcWrapError::out_of_range(0, 0))
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.cell.make_mut().clear();
        }
    }

    /// Join the string elements, bottom to top, with `separator`.
    ///
    /// Elements that are not strings are skipped.
    pub fn join(&self, separator: &str) -> Text {
        let pieces: Vec<&str> = self.items().iter().filter_map(Object::as_str).collect();
        Text::from(pieces.join(separator))
    }
}

impl PartialEq for Stack {
    fn eq(&self, other: &Self) -> bool {
        self.cell.is_equal(&other.cell)
    }
}

impl Eq for Stack {}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        assert_eq!(s.peek().ok().and_then(Object::as_i64), Some(2));
        assert_eq!(s.pop().ok().and_then(|o| o.as_i64()), Some(2));
        assert_eq!(s.pop().ok().and_then(|o| o.as_i64()), Some(1));
        assert!(s.is_empty());
    }

    #[test]
    fn test_empty_pop_and_peek_are_out_of_range() {
        let mut s = Stack::new();
        assert!(matches!(s.pop(), Err(RcWrapError::OutOfRange { .. })));
        assert!(matches!(s.peek(), Err(RcWrapError::OutOfRange { .. })));
    }

    #[test]
    fn test_empty_pop_keeps_copies_shared() {
        let a = Stack::new();
        let mut b = a.clone();
        assert!(b.pop().is_err());
        assert_eq!(a.share_count(), 2);
    }

    #[test]
    fn test_copies_detach_on_push() {
        let mut a = Stack::new();
        a.push("x");
        let mut b = a.clone();
        assert_eq!(a.share_count(), 2);
        b.push("y");
        assert_eq!(a.count(), 1);
        assert_eq!(b.count(), 2);
    }

    #[test]
    fn test_join_strings() {
        let mut s = Stack::new();
        s.push("usr");
        s.push(7);
        s.push("bin");
        s.push(None::<Object>);
        assert_eq!(s.join("/"), "usr/bin");
    }
}
