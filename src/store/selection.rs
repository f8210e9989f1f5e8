use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{Result, SelectionError};
use crate::item::Selectable;
use crate::logging::targets;
use crate::signal::{Signal, WatchGuard};

/// The mutation entry points trigger relays are written against.
pub trait SelectionActions<T> {
    /// Add `item` to the selection, or remove it if `selected` is false.
    fn select(&self, item: T, selected: bool);

    /// Apply [`select`](Self::select) to every candidate, in list order.
    fn select_all(&self, selected: bool);

    /// Empty the selection.
    fn clear(&self);
}

impl<T, A: SelectionActions<T> + ?Sized> SelectionActions<T> for &A {
    fn select(&self, item: T, selected: bool) {
        (**self).select(item, selected);
    }

    fn select_all(&self, selected: bool) {
        (**self).select_all(selected);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// Selected items of one candidate list.
///
/// Every store owns its own selection set; clones are handles to the same
/// store. Writes are not validated against the candidate list, and
/// replacing the list never drops selections of items that left it.
///
/// # Examples
///
/// ```
/// use bulk_select::SelectionStore;
///
/// let store = SelectionStore::new(vec!["a", "b", "c"]);
/// store.select("b", true);
/// assert!(store.is_selected(&"b"));
///
/// store.select_all(false);
/// assert_eq!(store.selection_len(), 0);
/// ```
pub struct SelectionStore<T> {
    candidates: Signal<Arc<[T]>>,
    selections: Signal<HashSet<T>>,
}

impl<T> Clone for SelectionStore<T> {
    fn clone(&self) -> Self {
        Self {
            candidates: self.candidates.clone(),
            selections: self.selections.clone(),
        }
    }
}

impl<T: Selectable> SelectionStore<T> {
    /// Create a store over `candidates` with nothing selected.
    pub fn new(candidates: impl Into<Arc<[T]>>) -> Self {
        Self {
            candidates: Signal::new(candidates.into()),
            selections: Signal::new(HashSet::new()),
        }
    }

    /// The current candidate list.
    pub fn candidates(&self) -> Arc<[T]> {
        self.candidates.get()
    }

    /// Replace the candidate list reference.
    ///
    /// Selections of items missing from the new list are kept; the views
    /// simply stop reporting them.
    pub fn set_candidates(&self, candidates: impl Into<Arc<[T]>>) {
        let candidates = candidates.into();
        debug!(target: targets::SELECTION, candidates = candidates.len(), "candidate list replaced");
        self.candidates.set(candidates);
    }

    /// Whether `item` is in the selection set, listed or not.
    pub fn is_selected(&self, item: &T) -> bool {
        self.selections.with(|set| set.contains(item))
    }

    /// Size of the selection set, stale entries included.
    pub fn selection_len(&self) -> usize {
        self.selections.with(HashSet::len)
    }

    /// Add `item` to the selection, or remove it if `selected` is false.
    ///
    /// Observers are notified only when the set actually changed.
    pub fn select(&self, item: T, selected: bool) {
        let changed = self.selections.update_if(|set| {
            if selected {
                set.insert(item)
            } else {
                set.remove(&item)
            }
        });
        trace!(target: targets::SELECTION, selected, changed, "select");
    }

    /// Apply [`select`](Self::select) to every candidate, in list order.
    ///
    /// Each item that changes notifies observers on its own.
    pub fn select_all(&self, selected: bool) {
        let candidates = self.candidates.with_untracked(Arc::clone);
        trace!(target: targets::SELECTION, selected, candidates = candidates.len(), "select all");
        for item in candidates.iter() {
            self.select(item.clone(), selected);
        }
    }

    /// Empty the selection. A no-op on an empty set.
    pub fn clear(&self) {
        let changed = self.selections.update_if(|set| {
            let changed = !set.is_empty();
            set.clear();
            changed
        });
        trace!(target: targets::SELECTION, changed, "clear");
    }

    /// Like [`select`](Self::select), but rejects items that are not in
    /// the candidate list.
    pub fn try_select(&self, item: T, selected: bool) -> Result<()> {
        let listed = self
            .candidates
            .with_untracked(|list| list.contains(&item).then_some(()).ok_or(list.len()));
        match listed {
            Ok(()) => {
                self.select(item, selected);
                Ok(())
            }
            Err(candidates) => Err(SelectionError::NotACandidate { candidates }),
        }
    }

    /// Selected items that are no longer in the candidate list.
    pub fn stale_selections(&self) -> Vec<T> {
        self.candidates.with(|list| {
            let listed: HashSet<&T> = list.iter().collect();
            self.selections
                .with(|set| set.iter().filter(|item| !listed.contains(item)).cloned().collect())
        })
    }

    /// Drop stale selections. Returns how many were removed.
    ///
    /// Never called by the crate itself; hosts that want selections to
    /// follow list changes call it after [`set_candidates`](Self::set_candidates).
    pub fn prune_stale(&self) -> usize {
        let candidates = self.candidates.with_untracked(Arc::clone);
        let listed: HashSet<&T> = candidates.iter().collect();
        let mut removed = 0;
        self.selections.update_if(|set| {
            let before = set.len();
            set.retain(|item| listed.contains(item));
            removed = before - set.len();
            removed > 0
        });
        debug!(target: targets::SELECTION, removed, "pruned stale selections");
        removed
    }

    /// Call `callback` with the selection set now and after every change.
    pub fn subscribe<F>(&self, callback: F) -> WatchGuard
    where
        F: Fn(&HashSet<T>) + Send + Sync + 'static,
    {
        self.selections.watch(move |set| callback(&set))
    }

    pub(crate) fn candidates_signal(&self) -> &Signal<Arc<[T]>> {
        &self.candidates
    }

    pub(crate) fn selections_signal(&self) -> &Signal<HashSet<T>> {
        &self.selections
    }
}

impl<T: Selectable> SelectionActions<T> for SelectionStore<T> {
    fn select(&self, item: T, selected: bool) {
        SelectionStore::select(self, item, selected);
    }

    fn select_all(&self, selected: bool) {
        SelectionStore::select_all(self, selected);
    }

    fn clear(&self) {
        SelectionStore::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ReactiveRuntime;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn select_is_idempotent() {
        ReactiveRuntime::scope(|| {
            let store = SelectionStore::new(vec![1, 2, 3]);
            let changes = Arc::new(AtomicUsize::new(0));
            let changes_clone = Arc::clone(&changes);
            let _guard = store.subscribe(move |_| {
                changes_clone.fetch_add(1, Ordering::SeqCst);
            });

            store.select(2, true);
            store.select(2, true);
            assert_eq!(store.selection_len(), 1);
            // One initial call plus one real change.
            assert_eq!(changes.load(Ordering::SeqCst), 2);

            store.select(3, false);
            assert_eq!(changes.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn select_then_deselect_restores_set() {
        let store = SelectionStore::new(vec!["a", "b"]);
        store.select("a", true);
        let before = store.selections.get();

        store.select("b", true);
        store.select("b", false);
        assert_eq!(store.selections.get(), before);
    }

    #[test]
    fn select_accepts_unlisted_items() {
        let store = SelectionStore::new(vec![1, 2]);
        store.select(9, true);
        assert!(store.is_selected(&9));
        assert_eq!(store.stale_selections(), vec![9]);
    }

    #[test]
    fn try_select_rejects_unlisted_items() {
        let store = SelectionStore::new(vec![1, 2]);
        assert_eq!(
            store.try_select(9, true),
            Err(SelectionError::NotACandidate { candidates: 2 })
        );
        assert_eq!(store.selection_len(), 0);
        assert_eq!(store.try_select(2, true), Ok(()));
        assert!(store.is_selected(&2));
    }

    #[test]
    fn select_all_applies_each_item_in_order() {
        ReactiveRuntime::scope(|| {
            let store = SelectionStore::new(vec![1, 2, 3]);
            store.select(2, true);
            let sizes = Arc::new(parking_lot::Mutex::new(Vec::new()));
            let sizes_clone = Arc::clone(&sizes);
            let _guard = store.subscribe(move |set| sizes_clone.lock().push(set.len()));

            store.select_all(true);
            // Item 2 was already selected and produces no step.
            assert_eq!(*sizes.lock(), vec![1, 2, 3]);
        });
    }

    #[test]
    fn replacing_candidates_keeps_selection_until_pruned() {
        let store = SelectionStore::new(vec![1, 2, 3]);
        store.select_all(true);
        store.set_candidates(vec![2, 3, 4]);

        assert!(store.is_selected(&1));
        assert_eq!(store.stale_selections(), vec![1]);
        assert_eq!(store.prune_stale(), 1);
        assert!(!store.is_selected(&1));
        assert_eq!(store.prune_stale(), 0);
    }

    #[test]
    fn stores_do_not_share_selection() {
        let first = SelectionStore::new(vec![1, 2]);
        let second = SelectionStore::new(vec![1, 2]);
        first.select(1, true);
        assert!(!second.is_selected(&1));
    }
}
