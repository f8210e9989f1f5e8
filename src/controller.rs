//! The bulk-selection controller.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::item::Selectable;
use crate::lifecycle::LifecycleGuard;
use crate::signal::WatchGuard;
use crate::store::{SelectionActions, SelectionStore};
use crate::view::{SelectionEntry, SelectionSummary, SelectionViews};

/// Bulk selection for one list, as held by the element that renders it.
///
/// Combines a [`SelectionStore`], its [`SelectionViews`] and a
/// [`LifecycleGuard`]. Clones are handles to the same controller; the
/// selection is cleared on [`teardown`](Self::teardown) or when the last
/// handle is dropped.
///
/// # Examples
///
/// ```
/// use bulk_select::BulkSelection;
///
/// let selection = BulkSelection::new(vec!["a", "b"]);
/// selection.select("a", true);
/// assert!(selection.has_selection());
/// assert!(!selection.has_all_selected());
///
/// selection.select("b", true);
/// assert!(selection.has_all_selected());
///
/// selection.teardown();
/// assert!(selection.selected().is_empty());
/// ```
pub struct BulkSelection<T: Selectable> {
    store: SelectionStore<T>,
    views: SelectionViews<T>,
    lifecycle: Arc<LifecycleGuard<T>>,
}

impl<T: Selectable> Clone for BulkSelection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            views: self.views.clone(),
            lifecycle: Arc::clone(&self.lifecycle),
        }
    }
}

impl<T: Selectable> BulkSelection<T> {
    /// Create a controller over `candidates` with nothing selected.
    pub fn new(candidates: impl Into<Arc<[T]>>) -> Self {
        let store = SelectionStore::new(candidates);
        let views = SelectionViews::new(&store);
        let lifecycle = Arc::new(LifecycleGuard::new(store.clone()));
        Self {
            store,
            views,
            lifecycle,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &SelectionStore<T> {
        &self.store
    }

    /// The memoized views.
    pub fn views(&self) -> &SelectionViews<T> {
        &self.views
    }

    /// The current candidate list.
    pub fn candidates(&self) -> Arc<[T]> {
        self.store.candidates()
    }

    /// Point the controller at a new candidate list.
    pub fn set_candidates(&self, candidates: impl Into<Arc<[T]>>) {
        self.store.set_candidates(candidates);
    }

    /// Every candidate with its selection flag, in candidate order.
    pub fn selection_view(&self) -> Arc<[SelectionEntry<T>]> {
        self.views.view()
    }

    /// The selected candidates, in candidate order.
    pub fn selected(&self) -> Arc<[T]> {
        self.views.selected()
    }

    /// Selected and total counts.
    pub fn summary(&self) -> SelectionSummary {
        self.views.summary()
    }

    /// At least one candidate is selected.
    pub fn has_selection(&self) -> bool {
        self.views.has_selection()
    }

    /// All candidates are selected. False when there are none.
    pub fn has_all_selected(&self) -> bool {
        self.views.has_all_selected()
    }

    /// Whether `item` is in the selection set, listed or not.
    pub fn is_selected(&self, item: &T) -> bool {
        self.store.is_selected(item)
    }

    /// See [`SelectionStore::select`].
    pub fn select(&self, item: T, selected: bool) {
        self.store.select(item, selected);
    }

    /// See [`SelectionStore::select_all`].
    pub fn select_all(&self, selected: bool) {
        self.store.select_all(selected);
    }

    /// Empty the selection.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Select only items that are in the candidate list.
    pub fn try_select(&self, item: T, selected: bool) -> Result<()> {
        self.store.try_select(item, selected)
    }

    /// Selected items that are no longer candidates.
    pub fn stale_selections(&self) -> Vec<T> {
        self.store.stale_selections()
    }

    /// Drop stale selections. Returns how many were removed.
    pub fn prune_stale(&self) -> usize {
        self.store.prune_stale()
    }

    /// Call `callback` with the selection set now and after every change.
    pub fn subscribe<F>(&self, callback: F) -> WatchGuard
    where
        F: Fn(&HashSet<T>) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    /// The owning element is being destroyed. Clears the selection once.
    pub fn teardown(&self) -> bool {
        self.lifecycle.teardown()
    }

    /// The owning element was inserted again after a teardown.
    pub fn mount(&self) {
        self.lifecycle.mount();
    }

    /// Whether the next teardown will clear the selection.
    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }
}

impl<T: Selectable> SelectionActions<T> for BulkSelection<T> {
    fn select(&self, item: T, selected: bool) {
        self.store.select(item, selected);
    }

    fn select_all(&self, selected: bool) {
        self.store.select_all(selected);
    }

    fn clear(&self) {
        self.store.clear();
    }
}
