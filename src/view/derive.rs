use std::collections::HashSet;
use std::hash::Hash;

/// One row of the selection view: a candidate and whether it is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry<T> {
    pub item: T,
    pub selected: bool,
}

/// Aggregate readout of a selection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSummary {
    /// Number of selected candidates.
    pub selected: usize,
    /// Number of candidates.
    pub total: usize,
}

impl SelectionSummary {
    /// Count the selected entries of `view`.
    pub fn from_view<T>(view: &[SelectionEntry<T>]) -> Self {
        Self {
            selected: view.iter().filter(|entry| entry.selected).count(),
            total: view.len(),
        }
    }

    /// At least one candidate is selected.
    pub fn has_selection(&self) -> bool {
        self.selected > 0
    }

    /// Every candidate is selected. False for an empty list.
    pub fn has_all_selected(&self) -> bool {
        self.total > 0 && self.selected == self.total
    }
}

/// Pair every candidate with its selection flag, in candidate order.
///
/// Selections that are not candidates do not appear.
pub fn selection_view<T>(candidates: &[T], selections: &HashSet<T>) -> Vec<SelectionEntry<T>>
where
    T: Clone + Eq + Hash,
{
    candidates
        .iter()
        .map(|item| SelectionEntry {
            item: item.clone(),
            selected: selections.contains(item),
        })
        .collect()
}

/// The selected candidates, in candidate order.
pub fn selected_subset<T: Clone>(view: &[SelectionEntry<T>]) -> Vec<T> {
    view.iter()
        .filter(|entry| entry.selected)
        .map(|entry| entry.item.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[char]) -> HashSet<char> {
        items.iter().copied().collect()
    }

    #[test]
    fn view_follows_candidate_order() {
        let view = selection_view(&['c', 'a', 'b'], &set(&['b', 'c']));
        let flags: Vec<_> = view.iter().map(|e| (e.item, e.selected)).collect();
        assert_eq!(flags, vec![('c', true), ('a', false), ('b', true)]);
        assert_eq!(selected_subset(&view), vec!['c', 'b']);
    }

    #[test]
    fn stale_selections_are_not_reported() {
        let view = selection_view(&['a', 'b'], &set(&['a', 'z']));
        assert_eq!(selected_subset(&view), vec!['a']);

        let summary = SelectionSummary::from_view(&view);
        assert_eq!(summary, SelectionSummary { selected: 1, total: 2 });
        assert!(summary.has_selection());
        assert!(!summary.has_all_selected());
    }

    #[test]
    fn empty_list_is_never_all_selected() {
        let view = selection_view::<char>(&[], &set(&['a']));
        let summary = SelectionSummary::from_view(&view);
        assert!(!summary.has_selection());
        assert!(!summary.has_all_selected());
    }

    #[test]
    fn full_selection_is_all_selected() {
        let view = selection_view(&['a', 'b'], &set(&['a', 'b']));
        assert!(SelectionSummary::from_view(&view).has_all_selected());
    }
}
