use std::marker::PhantomData;

use tracing::trace;

use crate::logging::targets;
use crate::store::SelectionActions;

/// Relay for a "select all" control.
pub struct BulkToggleButton<T, A> {
    target: A,
    _item: PhantomData<fn(T)>,
}

impl<T, A: SelectionActions<T>> BulkToggleButton<T, A> {
    pub fn new(target: A) -> Self {
        Self {
            target,
            _item: PhantomData,
        }
    }

    /// Apply `selected` to every candidate.
    pub fn on_toggle(&self, selected: bool) {
        trace!(target: targets::RELAY, selected, "bulk toggle");
        self.target.select_all(selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SelectionStore;

    #[test]
    fn toggles_every_candidate() {
        let store = SelectionStore::new(vec![1, 2, 3]);
        let button = BulkToggleButton::new(&store);

        button.on_toggle(true);
        assert_eq!(store.selection_len(), 3);

        button.on_toggle(false);
        assert_eq!(store.selection_len(), 0);
    }
}
