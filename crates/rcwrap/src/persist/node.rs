//! Document tree nodes and their mapping to objects

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cow::{CowHandle, Wrapper};
use crate::error::{RcWrapError, Result};
use crate::number::NumberValue;
use crate::object::Object;
use crate::{Array, Dictionary, Text};

/// One node of a serialized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// Ordered children
    Array(Vec<Node>),
    /// String-keyed children in insertion order
    Dictionary(IndexMap<String, Node>),
    /// Text
    String(String),
    /// Raw bytes
    Data(Vec<u8>),
    /// Integer number
    Integer(i64),
    /// Real number
    Real(f64),
    /// Truth value
    Boolean(bool),
}

impl Node {
    /// Build the document tree for `object`.
    ///
    /// Sets, null scalars and non-string dictionary keys have no document
    /// representation and yield `Unsupported`.
    pub fn from_object(object: &Object) -> Result<Node> {
        let node = match object {
            Object::Array(array) => {
                Node::Array(array.iter().map(Node::from_object).collect::<Result<_>>()?)
            }
            Object::Dictionary(dict) => {
                let mut entries = IndexMap::with_capacity(dict.count());
                for (key, value) in dict.iter() {
                    let key = key.as_str().ok_or_else(|| {
                        RcWrapError::Unsupported(format!("dictionary key of kind {}", key.kind()))
                    })?;
                    entries.insert(key.to_owned(), Node::from_object(value)?);
                }
                Node::Dictionary(entries)
            }
            Object::String(text) => Node::String(text.as_str().to_owned()),
            Object::Data(data) => Node::Data(data.bytes().to_vec()),
            Object::Set(_) => return Err(RcWrapError::Unsupported("set".to_string())),
            Object::Number(number) => match number.value() {
                Some(NumberValue::Integer(n)) => Node::Integer(n),
                Some(NumberValue::Real(n)) => Node::Real(n),
                None => return Err(RcWrapError::Unsupported("null number".to_string())),
            },
            Object::Boolean(b) if b.is_null() => {
                return Err(RcWrapError::Unsupported("null boolean".to_string()))
            }
            Object::Boolean(b) => Node::Boolean(b.value()),
        };
        Ok(node)
    }

    /// Whether every real in the tree is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Node::Real(n) => n.is_finite(),
            Node::Array(children) => children.iter().all(Node::is_finite),
            Node::Dictionary(children) => children.values().all(Node::is_finite),
            _ => true,
        }
    }

    /// Rebuild objects from the tree. Every container is fresh, private and
    /// mutable.
    pub fn into_object(self) -> Object {
        match self {
            Node::Array(children) => {
                let items: Vec<Object> = children.into_iter().map(Node::into_object).collect();
                Object::Array(Array::from(items))
            }
            Node::Dictionary(children) => Object::Dictionary(Dictionary::from(
                children
                    .into_iter()
                    .map(|(key, value)| (Object::string(key), value.into_object()))
                    .collect::<IndexMap<_, _>>(),
            )),
            Node::String(s) => Object::String(Text::from_cell(CowHandle::from_value(s))),
            Node::Data(bytes) => Object::data(bytes),
            Node::Integer(n) => Object::integer(n),
            Node::Real(n) => Object::real(n),
            Node::Boolean(b) => Object::boolean(b),
        }
    }
}
