//! Selection state.
//!
//! [`SelectionStore`] owns the set of selected items and a reference to the
//! host's candidate list, and exposes the mutation primitives every other
//! part of the crate goes through.

mod selection;

pub use selection::{SelectionActions, SelectionStore};
