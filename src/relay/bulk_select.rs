use std::marker::PhantomData;

use tracing::trace;

use super::{CheckInteraction, Suppression};
use crate::logging::targets;
use crate::store::SelectionActions;

/// Relay for a per-row checkbox.
///
/// Forwards `(item, event)` to `select(item, event.is_checked())` after
/// applying the configured [`Suppression`] to the event.
///
/// ```
/// use bulk_select::{BulkSelectButton, CheckboxEvent, SelectionStore};
///
/// let store = SelectionStore::new(vec![1, 2]);
/// let button = BulkSelectButton::new(&store);
///
/// let mut event = CheckboxEvent::new(true);
/// button.on_check(2, &mut event);
/// assert!(store.is_selected(&2));
/// assert!(event.propagation_stopped);
/// ```
pub struct BulkSelectButton<T, A> {
    target: A,
    suppression: Suppression,
    _item: PhantomData<fn(T)>,
}

impl<T, A: SelectionActions<T>> BulkSelectButton<T, A> {
    /// Relay with the default suppression (stop propagation).
    pub fn new(target: A) -> Self {
        Self::with_suppression(target, Suppression::default())
    }

    pub fn with_suppression(target: A, suppression: Suppression) -> Self {
        Self {
            target,
            suppression,
            _item: PhantomData,
        }
    }

    pub fn suppression(&self) -> Suppression {
        self.suppression
    }

    pub fn on_check<E>(&self, item: T, event: &mut E)
    where
        E: CheckInteraction + ?Sized,
    {
        self.suppression.apply(event);
        let checked = event.is_checked();
        trace!(target: targets::RELAY, checked, "bulk select");
        self.target.select(item, checked);
    }
}
