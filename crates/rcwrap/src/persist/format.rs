//! On-disk document formats

use std::fmt;

/// Leading bytes of a binary document.
pub const MAGIC: &[u8; 8] = b"rcwbin01";

/// Serialized-tree encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Human-readable text form
    #[default]
    Json,
    /// Compact binary form
    Binary,
}

impl Format {
    /// Detect the format of an encoded document from its leading bytes.
    pub fn detect(bytes: &[u8]) -> Format {
        if bytes.starts_with(MAGIC) {
            Format::Binary
        } else {
            Format::Json
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Binary => write!(f, "binary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(Format::detect(b"rcwbin01\x00"), Format::Binary);
        assert_eq!(Format::detect(b"{\"array\": []}"), Format::Json);
        assert_eq!(Format::detect(b""), Format::Json);
        assert_eq!(Format::default(), Format::Json);
    }
}
