use std::sync::Arc;

use super::derive::{selected_subset, selection_view, SelectionEntry, SelectionSummary};
use crate::item::Selectable;
use crate::signal::{create_memo, Memo};
use crate::store::SelectionStore;

/// Memoized views over a [`SelectionStore`].
///
/// Each view recomputes lazily on the first read after the candidate
/// list or the selection set changed. Reading a view inside an
/// [`Effect`](crate::Effect) subscribes the effect to it.
pub struct SelectionViews<T> {
    view: Memo<Arc<[SelectionEntry<T>]>>,
    selected: Memo<Arc<[T]>>,
    summary: Memo<SelectionSummary>,
    has_selection: Memo<bool>,
    has_all_selected: Memo<bool>,
}

impl<T> Clone for SelectionViews<T> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            selected: self.selected.clone(),
            summary: self.summary.clone(),
            has_selection: self.has_selection.clone(),
            has_all_selected: self.has_all_selected.clone(),
        }
    }
}

impl<T: Selectable> SelectionViews<T> {
    /// Build the views over `store`, in the current runtime.
    pub fn new(store: &SelectionStore<T>) -> Self {
        let view = create_memo({
            let candidates = store.candidates_signal().clone();
            let selections = store.selections_signal().clone();
            move || -> Arc<[SelectionEntry<T>]> {
                candidates.with(|list| selections.with(|set| selection_view(list, set).into()))
            }
        });

        let selected = create_memo({
            let view = view.clone();
            move || -> Arc<[T]> { view.with(|entries| selected_subset(entries).into()) }
        });

        let summary = create_memo({
            let view = view.clone();
            move || view.with(|entries| SelectionSummary::from_view(entries))
        });

        let has_selection = create_memo({
            let selected = selected.clone();
            move || selected.with(|items| !items.is_empty())
        });

        let has_all_selected = create_memo({
            let selected = selected.clone();
            let candidates = store.candidates_signal().clone();
            move || {
                let summary = SelectionSummary {
                    selected: selected.with(|items| items.len()),
                    total: candidates.with(|list| list.len()),
                };
                summary.has_all_selected()
            }
        });

        Self {
            view,
            selected,
            summary,
            has_selection,
            has_all_selected,
        }
    }

    /// Every candidate with its selection flag, in candidate order.
    pub fn view(&self) -> Arc<[SelectionEntry<T>]> {
        self.view.get()
    }

    /// The selected candidates, in candidate order.
    pub fn selected(&self) -> Arc<[T]> {
        self.selected.get()
    }

    /// Selected and total counts.
    pub fn summary(&self) -> SelectionSummary {
        self.summary.get()
    }

    /// At least one candidate is selected.
    pub fn has_selection(&self) -> bool {
        self.has_selection.get()
    }

    /// Every candidate is selected. False for an empty list.
    pub fn has_all_selected(&self) -> bool {
        self.has_all_selected.get()
    }
}
