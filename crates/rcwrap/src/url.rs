//! File-system location wrapper
//!
//! A `Url` is null until it is given a path. Locations are created
//! immutable; building a longer path with [`Url::push`] makes a private copy
//! first, so other holders of the same location never see the change.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::cow::{CowHandle, Wrapper};
use crate::runtime::{Kind, Resource};
use crate::text::Text;

impl Resource for PathBuf {
    const KIND: Kind = Kind::Url;

    fn with_capacity(capacity_hint: usize) -> Self {
        PathBuf::with_capacity(capacity_hint)
    }

    fn is_empty_value(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

/// A file-system location.
#[derive(Clone)]
pub struct Url {
    cell: CowHandle<PathBuf>,
}

impl Wrapper for Url {
    type Storage = PathBuf;

    fn cell(&self) -> &CowHandle<PathBuf> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut CowHandle<PathBuf> {
        &mut self.cell
    }

    fn from_cell(cell: CowHandle<PathBuf>) -> Self {
        Self { cell }
    }
}

impl Url {
    /// Create a null location.
    pub fn null() -> Self {
        Self::from_cell(CowHandle::null())
    }

    /// Location of `path` in the file system.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::from_cell(CowHandle::frozen(path.into()))
    }

    /// The path, or `None` when null.
    pub fn as_path(&self) -> Option<&Path> {
        self.cell.get().map(PathBuf::as_path)
    }

    /// The path as text; null text when the location is null.
    pub fn file_system_representation(&self) -> Text {
        match self.as_path() {
            Some(path) => Text::from(path.to_string_lossy().into_owned()),
            None => Text::null(),
        }
    }

    /// The final path component as text; null text when the location is null.
    ///
    /// A path with no final component (such as `/`) is returned whole.
    pub fn last_path_component(&self) -> Text {
        match self.as_path() {
            Some(path) => {
                let last = path.file_name().unwrap_or(path.as_os_str());
                Text::from(last.to_string_lossy().into_owned())
            }
            None => Text::null(),
        }
    }

    /// A new location with `component` appended. A null location yields
    /// `component` on its own.
    pub fn join(&self, component: impl AsRef<Path>) -> Url {
        match self.as_path() {
            Some(path) => Url::from_path(path.join(component)),
            None => Url::from_path(component.as_ref()),
        }
    }

    /// Append `component` in place.
    pub fn push(&mut self, component: impl AsRef<Path>) {
        self.cell.make_mut().push(component);
    }
}

impl Default for Url {
    /// The null location.
    fn default() -> Self {
        Self::null()
    }
}

impl From<&Text> for Url {
    /// Null or empty text gives a null location.
    fn from(text: &Text) -> Self {
        if text.is_empty() {
            Url::null()
        } else {
            Url::from_path(text.as_str())
        }
    }
}

impl From<&Path> for Url {
    fn from(path: &Path) -> Self {
        Url::from_path(path)
    }
}

impl From<PathBuf> for Url {
    fn from(path: PathBuf) -> Self {
        Url::from_path(path)
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.cell.is_equal(&other.cell)
    }
}

impl Eq for Url {}

impl Hash for Url {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_path().unwrap_or_else(|| Path::new("")).hash(state);
    }
}

impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_path() {
            Some(path) => write!(f, "url({:?})", path),
            None => f.write_str("null"),
        }
    }
}
