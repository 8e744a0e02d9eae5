//! The reference-counted substrate that wrappers are built on.
//!
//! A [`Handle`] is an owning reference to a shared, reference-counted
//! resource. Each live `Handle` accounts for exactly one unit of the
//! resource's share count: [`Handle::retain`] produces another owner and
//! [`Handle::release`] (or dropping the handle) gives one up. Storage is
//! freed when the last owner goes away.
//!
//! Resources come in two variants, mirroring platforms that distinguish
//! immutable and mutable flavours of the same logical type. Only mutable,
//! unshared storage may be written to; enforcing that is the job of
//! [`crate::cow::CowHandle`].

mod handle;
mod kind;

pub use handle::Handle;
pub use kind::Kind;

use crate::error::Result;

/// Capability set a storage type must provide to participate in the
/// reference-counted protocol.
///
/// Implementing this trait is what makes a type usable as the payload of a
/// [`Handle`] and, through it, of a [`crate::cow::CowHandle`]. Equality is
/// the resource's native structural equality.
pub trait Resource: Clone + PartialEq + 'static {
    /// Runtime type tag reported for handles of this resource.
    const KIND: Kind;

    /// Create empty storage with room for `capacity_hint` elements.
    fn with_capacity(capacity_hint: usize) -> Self;

    /// Fallible variant of [`Resource::with_capacity`].
    ///
    /// Resources with real allocation behind them override this to surface
    /// reservation failure instead of aborting.
    fn try_with_capacity(capacity_hint: usize) -> Result<Self> {
        Ok(Self::with_capacity(capacity_hint))
    }

    /// Whether this value is the empty value of its kind.
    ///
    /// A null wrapper compares equal to a wrapper holding an empty value.
    fn is_empty_value(&self) -> bool;
}
