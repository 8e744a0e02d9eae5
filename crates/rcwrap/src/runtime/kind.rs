//! Runtime type tags for resources

use std::fmt;

/// The kind of resource a handle or object refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Ordered sequence of objects
    Array,
    /// Key/value mapping of objects
    Dictionary,
    /// Unicode text
    String,
    /// Raw byte buffer
    Data,
    /// Unordered collection of distinct objects
    Set,
    /// Integer or real number
    Number,
    /// `true` or `false`
    Boolean,
    /// File system location
    Url,
}

impl Kind {
    /// Lowercase name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Array => "array",
            Kind::Dictionary => "dictionary",
            Kind::String => "string",
            Kind::Data => "data",
            Kind::Set => "set",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Url => "url",
        }
    }

    /// Whether objects of this kind hold other objects.
    pub fn is_container(self) -> bool {
        matches!(self, Kind::Array | Kind::Dictionary | Kind::Set)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
