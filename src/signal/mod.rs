//! Fine-grained reactive primitives.
//!
//! This module provides the building blocks the selection views are made of:
//! - Signals: Reactive state containers
//! - Memos: Cached computed values
//! - Effects: Side effects that react to changes

mod effect;
mod memo;
mod signal;

pub use effect::{create_effect, Effect};
pub use memo::{create_memo, Memo};
pub use signal::{Signal, WatchGuard};
