//! # rcwrap
//!
//! Value-semantics wrappers over reference-counted container handles.
//!
//! Every wrapper owns at most one handle to a shared, reference-counted
//! resource. Copying a wrapper is cheap: it retains the resource instead of
//! duplicating it. The first mutation through a wrapper whose resource is
//! shared or immutable makes a private mutable copy first, so writes are
//! never visible through other wrappers.
//!
//! ## Architecture
//!
//! - **Runtime**: [`Handle`], the reference-counted substrate, and the
//!   [`Resource`] capability trait
//! - **Copy-on-Write**: [`CowHandle`], the ownership cell and mutation gate
//!   shared by every wrapper
//! - **Wrappers**: [`Array`], [`Dictionary`], [`Text`], [`Data`], [`Set`],
//!   [`Number`], [`Boolean`], [`Url`], plus [`Pair`] and [`Stack`]
//! - **Persistence**: container documents on disk, see [`persist`]
//!
//! ## Example
//!
//! ```
//! use rcwrap::{Array, Wrapper};
//!
//! let mut a = Array::new();
//! a.append("one");
//!
//! let b = a.clone();
//! assert_eq!(a.share_count(), 2);
//!
//! a.append("two");
//! assert_eq!(a.count(), 2);
//! assert_eq!(b.count(), 1);
//! assert_eq!(b.share_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod boolean;
pub mod cow;
pub mod data;
pub mod dictionary;
pub mod entry;
pub mod error;
pub mod number;
pub mod object;
pub mod pair;
pub mod persist;
pub mod runtime;
pub mod set;
pub mod stack;
pub mod text;
pub mod url;

// Re-export main types
pub use array::Array;
pub use boolean::Boolean;
pub use cow::{CowHandle, CowState, Slot, Wrapper};
pub use data::Data;
pub use dictionary::Dictionary;
pub use entry::{ArrayEntry, DictionaryEntry};
pub use error::{RcWrapError, Result};
pub use number::{Number, NumberValue};
pub use object::{IntoObject, Object};
pub use pair::Pair;
pub use persist::Format;
pub use runtime::{Handle, Kind, Resource};
pub use set::Set;
pub use stack::Stack;
pub use text::Text;
pub use url::Url;

/// rcwrap version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
