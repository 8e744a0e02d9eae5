//! Owning handles to reference-counted resources

use std::fmt;
use std::rc::Rc;

use super::{Kind, Resource};
use crate::error::Result;

/// Storage plus the variant flag fixed at creation.
#[derive(Clone)]
struct Native<R> {
    mutable: bool,
    value: R,
}

/// An owning reference to a reference-counted resource.
///
/// A `Handle` is not `Clone`: taking another reference is explicit via
/// [`Handle::retain`], and giving one up is [`Handle::release`] or drop.
/// Handles are `!Send` and `!Sync`; the share count is not atomic.
pub struct Handle<R: Resource> {
    inner: Rc<Native<R>>,
}

impl<R: Resource> Handle<R> {
    // ═══════════════════════════════════════════════════════════════════
    // Creation
    // ═══════════════════════════════════════════════════════════════════

    /// Create an empty mutable resource. The caller owns the only reference.
    pub fn create_empty(capacity_hint: usize) -> Self {
        Self::create_mutable(R::with_capacity(capacity_hint))
    }

    /// Fallible variant of [`Handle::create_empty`].
    pub fn try_create_empty(capacity_hint: usize) -> Result<Self> {
        Ok(Self::create_mutable(R::try_with_capacity(capacity_hint)?))
    }

    /// Create a mutable resource holding `value`.
    pub fn create_mutable(value: R) -> Self {
        Self {
            inner: Rc::new(Native {
                mutable: true,
                value,
            }),
        }
    }

    /// Create an immutable resource holding `value`.
    pub fn create_immutable(value: R) -> Self {
        Self {
            inner: Rc::new(Native {
                mutable: false,
                value,
            }),
        }
    }

    /// Create an independent mutable resource with the same logical value.
    pub fn create_mutable_copy(&self) -> Self {
        Self::create_mutable(self.inner.value.clone())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Reference Counting
    // ═══════════════════════════════════════════════════════════════════

    /// Take another reference to the same resource.
    pub fn retain(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Give up this reference. Storage is freed when the count reaches zero.
    pub fn release(self) {
        drop(self);
    }

    /// Number of live handles referring to this resource.
    pub fn share_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════

    /// Whether the resource was created as the mutable variant.
    pub fn is_mutable(&self) -> bool {
        self.inner.mutable
    }

    /// Runtime type tag of the resource.
    pub fn kind(&self) -> Kind {
        R::KIND
    }

    /// Whether both handles refer to the same resource instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Identity short-circuit, then the resource's structural equality.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.inner.value == other.inner.value
    }

    /// Borrow the stored value.
    pub fn get(&self) -> &R {
        &self.inner.value
    }

    /// Mutable access to the stored value.
    ///
    /// Callers must hold the only reference to a mutable resource. Should that
    /// not hold, the storage is detached before being handed out so shared
    /// storage is never written through.
    pub(crate) fn get_mut(&mut self) -> &mut R {
        debug_assert!(self.is_mutable(), "writing through an immutable handle");
        debug_assert_eq!(self.share_count(), 1, "writing through a shared handle");
        &mut Rc::make_mut(&mut self.inner).value
    }
}

impl<R: Resource> fmt::Debug for Handle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &R::KIND)
            .field("mutable", &self.is_mutable())
            .field("share_count", &self.share_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter(Vec<u32>);

    impl Resource for Counter {
        const KIND: Kind = Kind::Data;

        fn with_capacity(capacity_hint: usize) -> Self {
            Counter(Vec::with_capacity(capacity_hint))
        }

        fn is_empty_value(&self) -> bool {
            self.0.is_empty()
        }
    }

    #[test]
    fn test_retain_and_release_track_share_count() {
        let a = Handle::<Counter>::create_empty(4);
        assert_eq!(a.share_count(), 1);

        let b = a.retain();
        assert_eq!(a.share_count(), 2);
        assert!(a.ptr_eq(&b));

        b.release();
        assert_eq!(a.share_count(), 1);
    }

    #[test]
    fn test_mutable_copy_is_independent() {
        let a = Handle::create_immutable(Counter(vec![1, 2]));
        let mut b = a.create_mutable_copy();

        assert!(!a.is_mutable());
        assert!(b.is_mutable());
        assert!(!a.ptr_eq(&b));
        assert!(a.is_equal(&b));

        b.get_mut().0.push(3);
        assert_eq!(a.get().0, vec![1, 2]);
        assert_eq!(b.get().0, vec![1, 2, 3]);
        assert!(!a.is_equal(&b));
    }

    #[test]
    fn test_kind_and_debug() {
        let a = Handle::<Counter>::create_empty(0);
        assert_eq!(a.kind(), Kind::Data);
        let text = format!("{:?}", a);
        assert!(text.contains("share_count: 1"));
    }
}
