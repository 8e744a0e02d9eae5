//! Write proxies for container elements.
//!
//! A proxy is created by a container's `at_mut` / `entry` method, which has
//! already made the container's storage private and mutable. The proxy only
//! borrows that storage, so it cannot outlive the container, and writes go
//! straight through to it.

use indexmap::IndexMap;

use crate::object::{IntoObject, Object};

/// Proxy for one existing array element.
#[derive(Debug)]
pub struct ArrayEntry<'a> {
    items: &'a mut Vec<Object>,
    index: usize,
}

impl<'a> ArrayEntry<'a> {
    /// `index` must be in bounds for `items`.
    pub(crate) fn new(items: &'a mut Vec<Object>, index: usize) -> Self {
        debug_assert!(index < items.len());
        Self { items, index }
    }

    /// Position of the element.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Read the element.
    pub fn get(&self) -> &Object {
        &self.items[self.index]
    }

    /// Mutable access to the element, e.g. to edit a nested container.
    pub fn get_mut(&mut self) -> &mut Object {
        &mut self.items[self.index]
    }

    /// Write `value` into the element. Writing no value is a no-op.
    pub fn set(&mut self, value: impl IntoObject) {
        if let Some(object) = value.into_object() {
            self.items[self.index] = object;
        }
    }

    /// Write `value`, returning the element it replaced.
    pub(crate) fn replace(&mut self, value: Object) -> Object {
        std::mem::replace(&mut self.items[self.index], value)
    }
}

/// Proxy for the value stored under one dictionary key.
///
/// The key may be absent; [`DictionaryEntry::set`] inserts it.
#[derive(Debug)]
pub struct DictionaryEntry<'a> {
    map: &'a mut IndexMap<Object, Object>,
    key: Object,
}

impl<'a> DictionaryEntry<'a> {
    pub(crate) fn new(map: &'a mut IndexMap<Object, Object>, key: Object) -> Self {
        Self { map, key }
    }

    /// The key this proxy stands for.
    pub fn key(&self) -> &Object {
        &self.key
    }

    /// Read the value, if present.
    pub fn get(&self) -> Option<&Object> {
        self.map.get(&self.key)
    }

    /// Mutable access to the value, if present.
    pub fn get_mut(&mut self) -> Option<&mut Object> {
        self.map.get_mut(&self.key)
    }

    /// Insert or replace the value. Writing no value is a no-op.
    pub fn set(&mut self, value: impl IntoObject) {
        if let Some(object) = value.into_object() {
            self.map.insert(self.key.clone(), object);
        }
    }

    /// Remove the key, returning its value.
    pub fn remove(self) -> Option<Object> {
        self.map.shift_remove(&self.key)
    }
}
