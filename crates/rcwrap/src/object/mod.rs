//! Dynamically typed elements stored inside containers

mod convert;
mod display;

pub use convert::IntoObject;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::runtime::Kind;
use crate::{Array, Boolean, Data, Dictionary, Number, Set, Text, Wrapper};

/// Any wrapper value that can live inside a container.
///
/// Cloning an `Object` retains the wrapped resource; it never copies it.
/// Equality is structural and hashing is consistent with it, so objects can
/// be dictionary keys and set members.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Object {
    /// Ordered sequence
    Array(Array),
    /// Key/value mapping
    Dictionary(Dictionary),
    /// Unicode text
    String(Text),
    /// Byte buffer
    Data(Data),
    /// Distinct members
    Set(Set),
    /// Integer or real
    Number(Number),
    /// Truth value
    Boolean(Boolean),
}

impl Object {
    // ═══════════════════════════════════════════════════════════════════
    // Convenience Constructors
    // ═══════════════════════════════════════════════════════════════════

    /// Create a string object
    pub fn string(s: impl Into<String>) -> Self {
        Object::String(Text::from(s.into()))
    }

    /// Create an integer object
    pub fn integer(n: i64) -> Self {
        Object::Number(Number::from(n))
    }

    /// Create a real object
    pub fn real(n: f64) -> Self {
        Object::Number(Number::from(n))
    }

    /// Create a boolean object
    pub fn boolean(b: bool) -> Self {
        Object::Boolean(Boolean::from(b))
    }

    /// Create a data object
    pub fn data(bytes: impl Into<Vec<u8>>) -> Self {
        Object::Data(Data::from(bytes.into()))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Queries
    // ═══════════════════════════════════════════════════════════════════

    /// Runtime type tag of the wrapped resource
    pub fn kind(&self) -> Kind {
        match self {
            Object::Array(_) => Kind::Array,
            Object::Dictionary(_) => Kind::Dictionary,
            Object::String(_) => Kind::String,
            Object::Data(_) => Kind::Data,
            Object::Set(_) => Kind::Set,
            Object::Number(_) => Kind::Number,
            Object::Boolean(_) => Kind::Boolean,
        }
    }

    /// Whether the wrapped wrapper holds no resource
    pub fn is_null(&self) -> bool {
        match self {
            Object::Array(v) => v.is_null(),
            Object::Dictionary(v) => v.is_null(),
            Object::String(v) => v.is_null(),
            Object::Data(v) => v.is_null(),
            Object::Set(v) => v.is_null(),
            Object::Number(v) => v.is_null(),
            Object::Boolean(v) => v.is_null(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Borrow as an array
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Object::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Mutably borrow as an array
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Object::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Borrow as a dictionary
    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Mutably borrow as a dictionary
    pub fn as_dictionary_mut(&mut self) -> Option<&mut Dictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Borrow as text
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Object::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        self.as_text().map(Text::as_str)
    }

    /// Extract byte slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Object::Data(d) => Some(d.bytes()),
            _ => None,
        }
    }

    /// Borrow as a set
    pub fn as_set(&self) -> Option<&Set> {
        match self {
            Object::Set(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow as a number
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Object::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Extract as i64 (reals are truncated)
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// Extract as f64
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Object::Boolean(b) => Some(b.value()),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Hashing Helpers
// ═══════════════════════════════════════════════════════════════════

/// Standalone hash of one value.
pub(crate) fn hash_one<V: Hash + ?Sized>(value: &V) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Order-independent hash of a collection: the wrapping sum of the
/// member hashes.
pub(crate) fn hash_unordered<V: Hash, I: IntoIterator<Item = V>>(items: I) -> u64 {
    items
        .into_iter()
        .fold(0u64, |sum, item| sum.wrapping_add(hash_one(&item)))
}
