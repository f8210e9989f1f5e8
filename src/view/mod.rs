//! Derived views of a selection.
//!
//! The free functions compute views from a candidate slice and a selection
//! set; [`SelectionViews`] keeps memoized copies of them in sync with a
//! [`SelectionStore`](crate::SelectionStore).

mod derive;
mod views;

pub use derive::{selected_subset, selection_view, SelectionEntry, SelectionSummary};
pub use views::SelectionViews;
