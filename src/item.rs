//! Item identity.
//!
//! Selection membership is decided by `Eq` + `Hash`. Plain ids and other
//! value types work as they are; items that must be told apart by
//! reference go through [`ByRef`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Anything that can sit in a candidate list.
pub trait Selectable: Clone + Eq + Hash + Send + Sync + 'static {}

impl<T> Selectable for T where T: Clone + Eq + Hash + Send + Sync + 'static {}

/// Shared item compared by pointer identity rather than by content.
///
/// Two `ByRef`s are equal only if they point at the same allocation, so
/// two rows with identical contents are still selected independently.
///
/// ```
/// use bulk_select::ByRef;
///
/// let a = ByRef::new("row");
/// let b = ByRef::new("row");
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
pub struct ByRef<T>(Arc<T>);

impl<T> ByRef<T> {
    /// Wrap `value` in a fresh allocation.
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// The shared allocation.
    pub fn as_arc(&self) -> &Arc<T> {
        &self.0
    }
}

impl<T> From<Arc<T>> for ByRef<T> {
    fn from(value: Arc<T>) -> Self {
        Self(value)
    }
}

impl<T> Clone for ByRef<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for ByRef<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for ByRef<T> {}

impl<T> Hash for ByRef<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl<T> Deref for ByRef<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for ByRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByRef").field(&*self.0).finish()
    }
}
