//! Data wrapper: a byte buffer with value semantics

use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;

use tracing::{debug, warn};

use crate::cow::{CowHandle, Wrapper};
use crate::error::Result;
use crate::runtime::{Kind, Resource};

impl Resource for Vec<u8> {
    const KIND: Kind = Kind::Data;

    fn with_capacity(capacity_hint: usize) -> Self {
        Vec::with_capacity(capacity_hint)
    }

    fn try_with_capacity(capacity_hint: usize) -> Result<Self> {
        let mut bytes = Vec::new();
        bytes.try_reserve(capacity_hint)?;
        Ok(bytes)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// A byte buffer.
#[derive(Clone, Default)]
pub struct Data {
    cell: CowHandle<Vec<u8>>,
}

impl Wrapper for Data {
    type Storage = Vec<u8>;

    fn cell(&self) -> &CowHandle<Vec<u8>> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut CowHandle<Vec<u8>> {
        &mut self.cell
    }

    fn from_cell(cell: CowHandle<Vec<u8>>) -> Self {
        Self { cell }
    }
}

impl Data {
    /// Create an empty buffer backed by fresh private storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity_hint` bytes.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self::from_cell(CowHandle::with_capacity(capacity_hint))
    }

    /// Fallible variant of [`Data::with_capacity`].
    pub fn try_with_capacity(capacity_hint: usize) -> Result<Self> {
        Ok(Self::from_cell(CowHandle::try_with_capacity(capacity_hint)?))
    }

    /// Create a null buffer.
    pub fn null() -> Self {
        Self::from_cell(CowHandle::null())
    }

    /// Deep copy into new private storage.
    pub fn copy(&self) -> Self {
        Self::from_cell(self.cell.copy())
    }

    /// The bytes (empty when null).
    pub fn bytes(&self) -> &[u8] {
        self.cell.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    /// Whether the buffer is null or empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `bytes`. Appending nothing leaves shared storage shared.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        if !bytes.is_empty() {
            self.cell.make_mut().extend_from_slice(bytes);
        }
    }

    /// Write the raw bytes to `path`. Returns `false` on failure.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match fs::write(path, self.bytes()) {
            Ok(()) => true,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to write data");
                false
            }
        }
    }

    /// Read the raw bytes of `path`; an unreadable file yields an empty buffer.
    pub fn from_path(path: impl AsRef<Path>) -> Data {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(bytes) => Data::from(bytes),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "data unreadable; using empty buffer");
                Data::new()
            }
        }
    }
}

impl From<Vec<u8>> for Data {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_cell(CowHandle::from_value(bytes))
    }
}

impl From<&[u8]> for Data {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl PartialEq for Data {
    fn eq(&self, other: &Self) -> bool {
        self.cell.is_equal(&other.cell)
    }
}

impl Eq for Data {}

impl Hash for Data {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes().hash(state);
    }
}
