//! Conversions into and out of [`Object`]

use super::Object;
use crate::error::RcWrapError;
use crate::runtime::Resource;
use crate::{Array, Boolean, Data, Dictionary, Number, Set, Text, Wrapper};

/// Conversion used by every insertion path.
///
/// Returns `None` for "no value": a null wrapper, a null object, or `None`.
/// Containers treat `None` as a no-op rather than an error.
pub trait IntoObject {
    /// Convert into an element, or `None` for "no value".
    fn into_object(self) -> Option<Object>;
}

impl IntoObject for Object {
    fn into_object(self) -> Option<Object> {
        if self.is_null() {
            None
        } else {
            Some(self)
        }
    }
}

impl IntoObject for &Object {
    fn into_object(self) -> Option<Object> {
        self.clone().into_object()
    }
}

impl<T: IntoObject> IntoObject for Option<T> {
    fn into_object(self) -> Option<Object> {
        self.and_then(IntoObject::into_object)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Wrapper Conversions
// ═══════════════════════════════════════════════════════════════════

macro_rules! wrapper_conversions {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Object {
                fn from(value: $ty) -> Self {
                    Object::$variant(value)
                }
            }

            impl IntoObject for $ty {
                fn into_object(self) -> Option<Object> {
                    if self.is_null() {
                        None
                    } else {
                        Some(Object::$variant(self))
                    }
                }
            }

            impl IntoObject for &$ty {
                fn into_object(self) -> Option<Object> {
                    self.clone().into_object()
                }
            }

            impl TryFrom<Object> for $ty {
                type Error = RcWrapError;

                /// Type-checked adoption: fails with `TypeMismatch` on any other kind.
                fn try_from(value: Object) -> Result<Self, Self::Error> {
                    match value {
                        Object::$variant(inner) => Ok(inner),
                        other => Err(RcWrapError::type_mismatch(
                            <<$ty as Wrapper>::Storage as Resource>::KIND,
                            other.kind(),
                        )),
                    }
                }
            }
        )*
    };
}

wrapper_conversions! {
    Array => Array,
    Dictionary => Dictionary,
    Text => String,
    Data => Data,
    Set => Set,
    Number => Number,
    Boolean => Boolean,
}

// ═══════════════════════════════════════════════════════════════════
// Primitive Conversions
// ═══════════════════════════════════════════════════════════════════

macro_rules! primitive_conversions {
    ($($ty:ty => $wrap:ident),* $(,)?) => {
        $(
            impl From<$ty> for Object {
                fn from(value: $ty) -> Self {
                    Object::from($wrap::from(value))
                }
            }

            impl IntoObject for $ty {
                fn into_object(self) -> Option<Object> {
                    Some(Object::from(self))
                }
            }
        )*
    };
}

primitive_conversions! {
    i32 => Number,
    i64 => Number,
    u32 => Number,
    f32 => Number,
    f64 => Number,
    bool => Boolean,
    &str => Text,
    String => Text,
    Vec<u8> => Data,
    &[u8] => Data,
}
