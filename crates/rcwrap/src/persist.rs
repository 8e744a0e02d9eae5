//! Persistence boundary to a serialized-tree document format.
//!
//! A document is a tree of [`Node`]s written either as pretty-printed JSON
//! or as the 8-byte [`MAGIC`] prefix followed by a bincode payload. The
//! format of an existing file is detected from its leading bytes.
//!
//! The checked functions here return [`Result`]. The container entry points
//! (`Array::write_to_path`, `Dictionary::read_from_path`, ...) apply the
//! wrapper policy on top: a failed write reports `false` and a failed read
//! yields a fresh empty container.

mod format;
mod node;

pub use format::{Format, MAGIC};
pub use node::Node;

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{RcWrapError, Result};
use crate::object::Object;

// ═══════════════════════════════════════════════════════════════════
// Codec
// ═══════════════════════════════════════════════════════════════════

/// Encode `root` in `format`.
pub fn encode(root: &Object, format: Format) -> Result<Vec<u8>> {
    let node = Node::from_object(root)?;
    match format {
        Format::Json => {
            if !node.is_finite() {
                return Err(RcWrapError::Unsupported(
                    "non-finite real in text document".to_string(),
                ));
            }
            Ok(serde_json::to_vec_pretty(&node)?)
        }
        Format::Binary => {
            let mut bytes = MAGIC.to_vec();
            bytes.extend(bincode::serialize(&node)?);
            Ok(bytes)
        }
    }
}

/// Decode a document, detecting its format.
pub fn decode(bytes: &[u8]) -> Result<(Object, Format)> {
    let format = Format::detect(bytes);
    let node: Node = match format {
        Format::Json => serde_json::from_slice(bytes)?,
        Format::Binary => bincode::deserialize(&bytes[MAGIC.len()..])?,
    };
    Ok((node.into_object(), format))
}

// ═══════════════════════════════════════════════════════════════════
// Files
// ═══════════════════════════════════════════════════════════════════

/// Write `root` to `path` in `format`.
pub fn write_document(path: &Path, root: &Object, format: Format) -> Result<()> {
    let bytes = encode(root, format)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Read the document at `path`.
pub fn read_document(path: &Path) -> Result<(Object, Format)> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

/// Write policy for container entry points: failure is logged and reported
/// as `false`.
pub(crate) fn store(path: &Path, root: Object, format: Format) -> bool {
    match write_document(path, &root, format) {
        Ok(()) => true,
        Err(err) => {
            warn!(
                path = %path.display(),
                kind = %root.kind(),
                %format,
                error = %err,
                "failed to write document"
            );
            false
        }
    }
}

/// Read policy for container entry points: an unreadable document or a
/// root of the wrong kind yields a fresh empty container and the default
/// format.
pub(crate) fn load_or_empty<W>(path: &Path) -> (W, Format)
where
    W: TryFrom<Object, Error = RcWrapError> + Default,
{
    let loaded = read_document(path).and_then(|(root, format)| Ok((W::try_from(root)?, format)));
    match loaded {
        Ok(found) => found,
        Err(err) => {
            debug!(
                path = %path.display(),
                error = %err,
                "document unreadable; using empty container"
            );
            (W::default(), Format::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Array;

    #[test]
    fn test_binary_has_magic_prefix() {
        let bytes = encode(&Object::Array(Array::new()), Format::Binary).unwrap();
        assert!(bytes.starts_with(MAGIC));
    }

    #[test]
    fn test_decode_detects_format() {
        let mut a = Array::new();
        a.append("x");
        for format in [Format::Json, Format::Binary] {
            let bytes = encode(&Object::Array(a.clone()), format).unwrap();
            let (root, detected) = decode(&bytes).unwrap();
            assert_eq!(detected, format);
            assert_eq!(root, Object::Array(a.clone()));
        }
    }

    #[test]
    fn test_nan_rejected_in_text_form_only() {
        let mut a = Array::new();
        a.append(f64::NAN);
        let root = Object::Array(a);
        assert!(matches!(
            encode(&root, Format::Json),
            Err(RcWrapError::Unsupported(_))
        ));
        assert!(encode(&root, Format::Binary).is_ok());
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        assert!(decode(b"not a document").is_err());
        assert!(decode(b"rcwbin01\xff\xff").is_err());
    }
}
