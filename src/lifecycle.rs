//! Teardown handling for the element that owns a selection.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::item::Selectable;
use crate::logging::targets;
use crate::store::SelectionStore;

/// Clears a selection when its owning element is torn down.
///
/// The guard starts mounted. [`teardown`](Self::teardown) clears the
/// store the first time it is called after each mount and does nothing
/// on repeated calls. Dropping a mounted guard tears it down.
///
/// ```
/// use bulk_select::{LifecycleGuard, SelectionStore};
///
/// let store = SelectionStore::new(vec![1, 2]);
/// store.select(1, true);
/// {
///     let _guard = LifecycleGuard::new(store.clone());
/// }
/// assert_eq!(store.selection_len(), 0);
/// ```
pub struct LifecycleGuard<T: Selectable> {
    store: SelectionStore<T>,
    mounted: AtomicBool,
}

impl<T: Selectable> LifecycleGuard<T> {
    pub fn new(store: SelectionStore<T>) -> Self {
        Self {
            store,
            mounted: AtomicBool::new(true),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Signal that the owning element is being destroyed.
    ///
    /// Returns whether this call cleared the selection.
    pub fn teardown(&self) -> bool {
        if self.mounted.swap(false, Ordering::SeqCst) {
            debug!(target: targets::LIFECYCLE, selected = self.store.selection_len(), "teardown");
            self.store.clear();
            true
        } else {
            false
        }
    }

    /// Signal that the owning element was inserted again.
    pub fn mount(&self) {
        if !self.mounted.swap(true, Ordering::SeqCst) {
            debug!(target: targets::LIFECYCLE, "mount");
        }
    }
}

impl<T: Selectable> Drop for LifecycleGuard<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}
