//! # Bulk Select
//!
//! Reactive bulk-selection state for an on-screen list.
//!
//! A host hands over its list of items and renders from the views this
//! crate keeps up to date; user input comes back through two relays.
//!
//! ## Selection (core)
//!
//! - `SelectionStore<T>` - The selected items of one candidate list, with
//!   `select`, `select_all` and `clear`
//! - `SelectionViews<T>` - Memoized selection view, selected subset,
//!   `has_selection` and `has_all_selected`
//! - `LifecycleGuard<T>` - Clears the selection when the owning element is
//!   torn down
//! - `BulkSelection<T>` - All of the above behind one handle
//!
//! ## Relays
//!
//! - `BulkSelectButton` - Per-row checkbox forwarding to `select`
//! - `BulkToggleButton` - "Select all" control forwarding to `select_all`
//!
//! ## Signals
//!
//! The views are built from fine-grained reactive primitives that are also
//! exported for hosts that want to observe them:
//! - `Signal<T>` - Reactive values that notify dependents when changed
//! - `Memo<T>` - Computed values that automatically track dependencies
//! - `Effect` - Side effects that run when dependencies change

pub mod controller;
pub mod error;
pub mod item;
pub mod lifecycle;
pub mod logging;
pub mod relay;
pub mod runtime;
pub mod signal;
pub mod store;
pub mod view;

// Re-export main types for convenience
pub use controller::BulkSelection;
pub use error::{Result, SelectionError};
pub use item::{ByRef, Selectable};
pub use lifecycle::LifecycleGuard;
pub use relay::{BulkSelectButton, BulkToggleButton, CheckInteraction, CheckboxEvent, Suppression};
pub use signal::{create_effect, create_memo, Effect, Memo, Signal, WatchGuard};
pub use store::{SelectionActions, SelectionStore};
pub use view::{SelectionEntry, SelectionSummary, SelectionViews};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let selection = BulkSelection::new(vec![1, 2]);
        assert!(!selection.has_selection());
        selection.select(2, true);
        assert_eq!(&*selection.selected(), &[2]);
    }
}
